//! Header component: user icon and the modal trigger.

/// Icon shown once every row has been checked and the action button is pressed.
pub const STAR_ICON: &str = "star";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderState {
    user_icon_image: Option<String>,
}

impl HeaderState {
    pub fn user_icon_image(&self) -> Option<&str> {
        self.user_icon_image.as_deref()
    }

    pub(crate) fn set_user_icon_image(&mut self, name: &str) -> bool {
        if self.user_icon_image.as_deref() == Some(name) {
            return false;
        }
        self.user_icon_image = Some(name.to_string());
        true
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderMsg {
    /// User tapped the header button that opens the modal.
    ShowModal,
    /// Header picked a new user icon.
    UserIconChanged(String),
}

/// Header sub-reducer. Returns whether header state changed.
///
/// `ShowModal` has no header-local effect; the parent owns the modal flag.
pub fn update_header(state: &mut HeaderState, msg: &HeaderMsg) -> bool {
    match msg {
        HeaderMsg::ShowModal => false,
        HeaderMsg::UserIconChanged(name) => state.set_user_icon_image(name),
    }
}
