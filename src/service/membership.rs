use crate::{
    config::Config,
    data::guild::GuildApi,
    error::{command::CommandError, AppError},
    model::{guild::GuildSnapshot, invocation::Invoker},
    service::{allow_member, deny_member},
    util::name::normalize,
};

pub struct MembershipService<'a> {
    api: &'a dyn GuildApi,
    config: &'a Config,
}

impl<'a> MembershipService<'a> {
    pub fn new(api: &'a dyn GuildApi, config: &'a Config) -> Self {
        Self { api, config }
    }

    /// Grants the invoker access to a CTF.
    ///
    /// Posts an audit line in the main channel, then adds a member overwrite
    /// allowing participant permissions on both categories. A missing main channel
    /// only skips the audit line.
    ///
    /// # Returns
    /// - `Ok(())` - The invoker participates in the CTF
    /// - `Err(AppError::CommandErr(UnknownCtf))` - The CTF does not exist
    pub async fn join(
        &self,
        guild: &GuildSnapshot,
        ctf_name: &str,
        invoker: &Invoker,
    ) -> Result<(), AppError> {
        let ctf = normalize(ctf_name);
        let categories = guild
            .ctf_categories(&ctf)
            .ok_or_else(|| CommandError::UnknownCtf(ctf_name.to_string()))?;

        match guild.main_channel(&ctf, &self.config.main_channel_name) {
            Some(main_channel) => {
                let audit = format!(":scroll: audit log: {} joined", invoker.display_name);
                self.api.send_message(main_channel.id, &audit).await?;
            }
            None => tracing::warn!("CTF {} has no main channel, skipping audit line", ctf),
        }

        for category_id in categories.ids() {
            self.api
                .set_overwrite(category_id, allow_member(invoker.user_id))
                .await?;
        }

        tracing::info!("User {} joined CTF {}", invoker.user_id, ctf);

        Ok(())
    }

    /// Revokes the invoker's access to a CTF.
    ///
    /// Adds a member overwrite denying participant permissions on both categories,
    /// which also hides the CTF from invokers who see it through a role.
    pub async fn leave(
        &self,
        guild: &GuildSnapshot,
        ctf_name: &str,
        invoker: &Invoker,
    ) -> Result<(), AppError> {
        let ctf = normalize(ctf_name);
        let categories = guild
            .ctf_categories(&ctf)
            .ok_or_else(|| CommandError::UnknownCtf(ctf_name.to_string()))?;

        for category_id in categories.ids() {
            self.api
                .set_overwrite(category_id, deny_member(invoker.user_id))
                .await?;
        }

        tracing::info!("User {} left CTF {}", invoker.user_id, ctf);

        Ok(())
    }
}
