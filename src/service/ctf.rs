use serenity::all::{ChannelId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId};
use sha2::{Digest, Sha256};

use crate::{
    config::Config,
    data::guild::{ChannelUpdate, GuildApi},
    error::{command::CommandError, AppError},
    model::guild::GuildSnapshot,
    service::{allow_role, deny_role},
    util::name::{normalize, solved_category_name, SOLVED_SUFFIX},
};

/// Audit line posted in the main channel once a CTF is made public.
pub const PUBLIC_AUDIT_MESSAGE: &str = ":scroll: audit log: CTF is now public!";

pub struct CtfService<'a> {
    api: &'a dyn GuildApi,
    config: &'a Config,
}

impl<'a> CtfService<'a> {
    pub fn new(api: &'a dyn GuildApi, config: &'a Config) -> Self {
        Self { api, config }
    }

    /// Creates the workspace of a new CTF.
    ///
    /// Creates the main and the solved category with identical overwrites (@everyone
    /// denied, the given roles and the bot roles allowed), creates the main channel
    /// in the main category, then moves both categories to the top of the channel
    /// list. Moving the solved category first leaves the main category above it.
    ///
    /// # Arguments
    /// - `guild` - Current guild snapshot
    /// - `name` - CTF name as typed by the user
    /// - `role_ids` - Roles granted access; the configured member roles when empty
    ///
    /// # Returns
    /// - `Ok(())` - Workspace created
    /// - `Err(AppError::CommandErr(ReservedCtfName))` - The name ends with `-solved`
    /// - `Err(AppError::CommandErr(CtfExists))` - Either category already exists
    /// - `Err(AppError::DiscordErr)` - A Discord API call failed midway
    pub async fn create(
        &self,
        guild: &GuildSnapshot,
        name: &str,
        role_ids: &[RoleId],
    ) -> Result<(), AppError> {
        let normalized = normalize(name);
        check_ctf_name(&normalized)?;
        if guild.ctf_category(&normalized).is_some()
            || guild.ctf_solved_category(&normalized).is_some()
        {
            return Err(CommandError::CtfExists(normalized).into());
        }

        let overwrites = self.default_overwrites(guild, role_ids);

        let main = self
            .api
            .create_category(&normalized, overwrites.clone())
            .await?;
        let solved = self
            .api
            .create_category(&solved_category_name(&normalized), overwrites)
            .await?;
        self.api
            .create_text_channel(&self.config.main_channel_name, main.id)
            .await?;

        self.api
            .edit_channel(solved.id, ChannelUpdate::position(1))
            .await?;
        self.api
            .edit_channel(main.id, ChannelUpdate::position(1))
            .await?;

        tracing::info!("Created CTF {}", normalized);

        Ok(())
    }

    /// Renames both categories of a CTF, keeping the solved suffix.
    ///
    /// # Returns
    /// - `Ok(())` - Renamed, or the new name equals the current one
    /// - `Err(AppError::CommandErr(UnknownCtf))` - The CTF does not exist
    /// - `Err(AppError::CommandErr(ReservedCtfName))` - The new name ends with `-solved`
    /// - `Err(AppError::CommandErr(CtfExists))` - Another CTF uses the new name
    pub async fn rename(
        &self,
        guild: &GuildSnapshot,
        old_name: &str,
        new_name: &str,
    ) -> Result<(), AppError> {
        let old_normalized = normalize(old_name);
        let categories = guild
            .ctf_categories(&old_normalized)
            .ok_or_else(|| CommandError::UnknownCtf(old_name.to_string()))?;

        let new_normalized = normalize(new_name);
        if new_normalized == old_normalized {
            return Ok(());
        }
        check_ctf_name(&new_normalized)?;
        if guild.ctf_category(&new_normalized).is_some()
            || guild.ctf_solved_category(&new_normalized).is_some()
        {
            return Err(CommandError::CtfExists(new_normalized).into());
        }

        self.api
            .edit_channel(categories.main.id, ChannelUpdate::rename(&new_normalized))
            .await?;
        self.api
            .edit_channel(
                categories.solved.id,
                ChannelUpdate::rename(solved_category_name(&new_normalized)),
            )
            .await?;

        tracing::info!("Renamed CTF {} to {}", old_normalized, new_normalized);

        Ok(())
    }

    /// Makes a finished CTF visible to everyone and announces it in the main channel.
    ///
    /// Replaces the @everyone overwrite of both categories with one allowing
    /// `VIEW_CHANNEL`; managing channels stays reserved to participants.
    ///
    /// # Returns
    /// - `Ok(())` - Both categories are public
    /// - `Err(AppError::CommandErr(UnknownCtf))` - The CTF does not exist
    pub async fn publish(&self, guild: &GuildSnapshot, name: &str) -> Result<(), AppError> {
        let normalized = normalize(name);
        let categories = guild
            .ctf_categories(&normalized)
            .ok_or_else(|| CommandError::UnknownCtf(name.to_string()))?;

        let everyone = PermissionOverwrite {
            allow: Permissions::VIEW_CHANNEL,
            deny: Permissions::MANAGE_CHANNELS,
            kind: PermissionOverwriteType::Role(guild.everyone_role_id()),
        };
        for category_id in categories.ids() {
            self.api.set_overwrite(category_id, everyone.clone()).await?;
        }

        match guild.main_channel(&normalized, &self.config.main_channel_name) {
            Some(main_channel) => {
                self.api
                    .send_message(main_channel.id, PUBLIC_AUDIT_MESSAGE)
                    .await?
            }
            None => tracing::warn!("CTF {} has no main channel to announce in", normalized),
        }

        tracing::info!("CTF {} is now public", normalized);

        Ok(())
    }

    /// Deletes a CTF workspace after checking the confirmation digest.
    ///
    /// The confirmation must be the hex SHA-256 of the normalized CTF name, as
    /// printed by `printf ctf-name | sha256sum`. Every channel in either category is
    /// deleted first, then the solved and the main category.
    ///
    /// # Arguments
    /// - `guild` - Current guild snapshot
    /// - `name` - CTF name as typed by the user
    /// - `confirmation` - Hex digest typed by the user, case-insensitive
    ///
    /// # Returns
    /// - `Ok(())` - Workspace deleted
    /// - `Err(AppError::CommandErr(UnknownCtf))` - The CTF does not exist
    /// - `Err(AppError::CommandErr(DigestMismatch))` - Wrong confirmation, nothing deleted
    pub async fn delete(
        &self,
        guild: &GuildSnapshot,
        name: &str,
        confirmation: &str,
    ) -> Result<(), AppError> {
        let normalized = normalize(name);
        let categories = guild
            .ctf_categories(&normalized)
            .ok_or_else(|| CommandError::UnknownCtf(name.to_string()))?;

        if !confirmation.trim().eq_ignore_ascii_case(&name_digest(&normalized)) {
            return Err(CommandError::DigestMismatch(normalized).into());
        }

        let channel_ids: Vec<ChannelId> = guild
            .ctf_channels(categories)
            .map(|channel| channel.id)
            .collect();
        for channel_id in channel_ids {
            self.api.delete_channel(channel_id).await?;
        }

        self.api.delete_channel(categories.solved.id).await?;
        self.api.delete_channel(categories.main.id).await?;

        tracing::info!("Deleted CTF {}", normalized);

        Ok(())
    }

    /// Overwrites applied to both categories of a new CTF.
    ///
    /// @everyone is denied first; every granted role appears once, in argument
    /// order, followed by the bot roles. The @everyone role is never granted.
    fn default_overwrites(
        &self,
        guild: &GuildSnapshot,
        role_ids: &[RoleId],
    ) -> Vec<PermissionOverwrite> {
        let everyone_id = guild.everyone_role_id();
        let granted = if role_ids.is_empty() {
            &self.config.member_role_ids
        } else {
            role_ids
        };

        let mut allowed: Vec<RoleId> = Vec::new();
        for &role_id in granted.iter().chain(&self.config.bot_role_ids) {
            if role_id != everyone_id && !allowed.contains(&role_id) {
                allowed.push(role_id);
            }
        }

        std::iter::once(deny_role(everyone_id))
            .chain(allowed.into_iter().map(allow_role))
            .collect()
    }
}

/// Main category names must not look like solved category names.
fn check_ctf_name(normalized: &str) -> Result<(), CommandError> {
    if normalized.ends_with(SOLVED_SUFFIX) {
        return Err(CommandError::ReservedCtfName(normalized.to_string()));
    }
    Ok(())
}

/// Lowercase hex SHA-256 of a normalized CTF name.
pub fn name_digest(normalized_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized_name.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
