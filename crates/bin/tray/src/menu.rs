//! Menu module.

use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};

/// What a menu item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run a check cycle now.
    CheckNow,

    /// Show the full status report.
    ShowStatus,

    /// Exit the application.
    Quit,
}

impl Action {
    const ALL: [Self; 3] = [Self::CheckNow, Self::ShowStatus, Self::Quit];

    /// The menu item id.
    fn id(self) -> &'static str {
        match self {
            Self::CheckNow => "check-now",
            Self::ShowStatus => "show-status",
            Self::Quit => "quit",
        }
    }

    /// The menu item text.
    fn text(self) -> &'static str {
        match self {
            Self::CheckNow => "Check Now",
            Self::ShowStatus => "Show Status",
            Self::Quit => "Quit",
        }
    }

    /// The action of a clicked menu item.
    pub fn from_id(id: &MenuId) -> Option<Self> {
        Self::ALL.into_iter().find(|action| id.0 == action.id())
    }
}

/// Build the tray menu.
pub fn build_menu() -> Result<Menu, tray_icon::menu::Error> {
    let menu = Menu::new();
    menu.append(&item(Action::CheckNow))?;
    menu.append(&item(Action::ShowStatus))?;
    menu.append(&PredefinedMenuItem::separator())?;
    menu.append(&item(Action::Quit))?;
    Ok(menu)
}

fn item(action: Action) -> MenuItem {
    MenuItem::with_id(action.id(), action.text(), true, None)
}
