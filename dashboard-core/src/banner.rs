/// Visibility state for the transient alert banner. Dismissal is one-way:
/// once hidden by the user, the banner only returns when the upstream
/// `active` flag transitions from false back to true. Re-rendering with an
/// unchanged `active=true` must not resurrect a dismissed banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BannerState {
    visible: bool,
    last_active: bool,
}

impl BannerState {
    pub fn new(active: bool) -> Self {
        Self {
            visible: active,
            last_active: active,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Fold in the current upstream flag. Only a value transition changes
    /// visibility; a repeated value is a no-op.
    pub fn sync(&mut self, active: bool) {
        if active != self.last_active {
            self.visible = active;
            self.last_active = active;
        }
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_visible_when_active() {
        assert!(BannerState::new(true).is_visible());
        assert!(!BannerState::new(false).is_visible());
    }

    #[test]
    fn dismiss_hides_until_reactivation() {
        let mut banner = BannerState::new(true);
        banner.dismiss();
        assert!(!banner.is_visible());

        // Same active value again: no observable re-trigger.
        banner.sync(true);
        assert!(!banner.is_visible());

        // A real transition brings it back.
        banner.sync(false);
        banner.sync(true);
        assert!(banner.is_visible());
    }

    #[test]
    fn deactivation_hides_the_banner() {
        let mut banner = BannerState::new(true);
        banner.sync(false);
        assert!(!banner.is_visible());
    }

    #[test]
    fn dismissing_does_not_consume_the_active_flag() {
        let mut banner = BannerState::new(true);
        banner.dismiss();
        banner.sync(false);
        banner.sync(true);
        banner.dismiss();
        banner.sync(true);
        assert!(!banner.is_visible());
    }
}
