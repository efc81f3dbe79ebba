//! Locale-wide resolution across every trigger in the rules.

use log::debug;

use super::{PackageSet, Query, Resolver};
use crate::backend::PackageBackend;
use crate::rules::WILDCARD;
use crate::runtime::Runtime;

impl<B: PackageBackend, R: Runtime> Resolver<B, R> {
    /// Triggers whose rules currently apply.
    ///
    /// The wildcard trigger always applies. A named trigger applies when the
    /// backend reports it installed; a failed query leaves it inactive.
    pub async fn active_triggers(&self) -> Vec<String> {
        let named: Vec<String> = self
            .rules
            .triggers()
            .filter(|trigger| *trigger != WILDCARD)
            .map(str::to_string)
            .collect();

        let mut active = vec![WILDCARD.to_string()];
        for (trigger, answer) in self.query(named, Query::Installed).await {
            match answer {
                Ok(true) => active.push(trigger),
                Ok(false) => {}
                Err(e) => debug!("Skipping trigger {}: installed query failed: {:#}", trigger, e),
            }
        }
        active.sort();
        active
    }

    /// Every language support package recommended for `locale`.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_for_locale(&self, locale: &str, include_installed: bool) -> PackageSet {
        let mut packages = PackageSet::new();
        for trigger in self.active_triggers().await {
            let resolved = self
                .resolve_for_package(&trigger, locale, include_installed)
                .await;
            debug!("Trigger {:?} contributes {} package(s)", trigger, resolved.len());
            packages.extend(resolved);
        }
        packages
    }
}
