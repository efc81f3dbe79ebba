//! Fixed exclusion policies applied after resolution.

use log::debug;

use super::PackageSet;

/// Environment variable naming the active desktop session(s).
pub const DESKTOP_ENV: &str = "XDG_CURRENT_DESKTOP";

/// Packages that are never recommended.
///
/// `hunspell-de-*` conflict with the `-frami` dictionaries and `hunspell-gl`
/// conflicts with `hunspell-gl-es` (<https://launchpad.net/bugs/1578821>).
pub const CONFLICTING_PACKAGES: &[&str] = &[
    "hunspell-de-de",
    "hunspell-de-at",
    "hunspell-de-ch",
    "hunspell-gl",
];

const FCITX_PREFIX: &str = "fcitx";

/// Whether `desktop` (a `:`-separated list) contains the GNOME session.
pub fn is_gnome(desktop: &str) -> bool {
    desktop.split(':').any(|item| item == "GNOME")
}

/// Drop Fcitx input methods when running under GNOME.
pub fn exclude_for_desktop(packages: &mut PackageSet, desktop: &str) {
    if !is_gnome(desktop) {
        return;
    }
    packages.retain(|pkg| {
        let keep = !pkg.starts_with(FCITX_PREFIX);
        if !keep {
            debug!("Excluding {} on GNOME", pkg);
        }
        keep
    });
}

/// Drop the packages known to conflict with better alternatives.
pub fn exclude_conflicts(packages: &mut PackageSet) {
    for pkg in CONFLICTING_PACKAGES {
        if packages.remove(*pkg) {
            debug!("Excluding conflicting package {}", pkg);
        }
    }
}
