use crate::{
    config::Config,
    data::guild::{ChannelUpdate, GuildApi},
    error::{command::CommandError, AppError},
    model::guild::{CtfCategories, GuildSnapshot},
    util::name::normalize,
};

pub struct ChallengeService<'a> {
    api: &'a dyn GuildApi,
    config: &'a Config,
}

impl<'a> ChallengeService<'a> {
    pub fn new(api: &'a dyn GuildApi, config: &'a Config) -> Self {
        Self { api, config }
    }

    /// Creates a challenge channel in the main category of a CTF.
    ///
    /// # Returns
    /// - `Ok(())` - Channel created
    /// - `Err(AppError::CommandErr(UnknownCtf))` - The CTF does not exist
    /// - `Err(AppError::CommandErr(ChallengeExists))` - A text channel of the CTF,
    ///   main channel included, already carries the name
    pub async fn create(
        &self,
        guild: &GuildSnapshot,
        ctf_name: &str,
        chall_name: &str,
    ) -> Result<(), AppError> {
        let ctf = normalize(ctf_name);
        let categories = self.categories(guild, ctf_name, &ctf)?;

        let chall = normalize(chall_name);
        if guild.ctf_text_channel(&ctf, &chall).is_some() {
            return Err(CommandError::ChallengeExists(chall).into());
        }

        self.api.create_text_channel(&chall, categories.main.id).await?;

        tracing::info!("Created challenge {} in CTF {}", chall, ctf);

        Ok(())
    }

    /// Renames a challenge channel.
    ///
    /// # Returns
    /// - `Ok(())` - Renamed, or the new name equals the current one
    /// - `Err(AppError::CommandErr(UnknownCtf | UnknownChallenge))` - Nothing to rename
    /// - `Err(AppError::CommandErr(ChallengeExists))` - The new name is taken
    pub async fn rename(
        &self,
        guild: &GuildSnapshot,
        ctf_name: &str,
        chall_name: &str,
        new_name: &str,
    ) -> Result<(), AppError> {
        let ctf = normalize(ctf_name);
        self.categories(guild, ctf_name, &ctf)?;
        let channel = guild
            .challenge_channel(&ctf, &normalize(chall_name), &self.config.main_channel_name)
            .ok_or_else(|| CommandError::UnknownChallenge(chall_name.to_string()))?;

        let new_normalized = normalize(new_name);
        if new_normalized == channel.name {
            return Ok(());
        }
        if guild.ctf_text_channel(&ctf, &new_normalized).is_some() {
            return Err(CommandError::ChallengeExists(new_normalized).into());
        }

        self.api
            .edit_channel(channel.id, ChannelUpdate::rename(&new_normalized))
            .await?;

        tracing::info!(
            "Renamed challenge {} to {} in CTF {}",
            channel.name,
            new_normalized,
            ctf
        );

        Ok(())
    }

    /// Moves a challenge channel to the solved category.
    ///
    /// Moving an already solved challenge is a no-op on Discord's side.
    pub async fn mark_solved(
        &self,
        guild: &GuildSnapshot,
        ctf_name: &str,
        chall_name: &str,
    ) -> Result<(), AppError> {
        self.move_challenge(guild, ctf_name, chall_name, true).await
    }

    /// Moves a challenge channel back to the main category.
    pub async fn mark_unsolved(
        &self,
        guild: &GuildSnapshot,
        ctf_name: &str,
        chall_name: &str,
    ) -> Result<(), AppError> {
        self.move_challenge(guild, ctf_name, chall_name, false).await
    }

    async fn move_challenge(
        &self,
        guild: &GuildSnapshot,
        ctf_name: &str,
        chall_name: &str,
        solved: bool,
    ) -> Result<(), AppError> {
        let ctf = normalize(ctf_name);
        let categories = self.categories(guild, ctf_name, &ctf)?;
        let channel = guild
            .challenge_channel(&ctf, &normalize(chall_name), &self.config.main_channel_name)
            .ok_or_else(|| CommandError::UnknownChallenge(chall_name.to_string()))?;

        let target = if solved {
            categories.solved.id
        } else {
            categories.main.id
        };
        self.api
            .edit_channel(channel.id, ChannelUpdate::move_to(target))
            .await?;

        tracing::info!(
            "Marked challenge {} of CTF {} as {}",
            channel.name,
            ctf,
            if solved { "solved" } else { "unsolved" }
        );

        Ok(())
    }

    fn categories<'g>(
        &self,
        guild: &'g GuildSnapshot,
        ctf_name: &str,
        normalized: &str,
    ) -> Result<CtfCategories<'g>, CommandError> {
        guild
            .ctf_categories(normalized)
            .ok_or_else(|| CommandError::UnknownCtf(ctf_name.to_string()))
    }
}
