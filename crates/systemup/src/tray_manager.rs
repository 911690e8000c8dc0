//! System tray icon and popup menu.
//!
//! Owns the notification-area icon for the lifetime of the session. The icon
//! is removed from the shell when the manager is dropped.

use crate::{AppError, AppResult, IconTheme};

use systemup_core::{
    CoreError, CoreResult, MenuEntry, MenuModel, PLACEHOLDER_TOOLTIP, ScreenPoint, TrayShell,
};

use std::panic::Location;

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};
use tray_icon::{
    Icon, TrayIcon, TrayIconBuilder,
    menu::{
        ContextMenu, Menu, MenuId, MenuItem, PredefinedMenuItem,
        dpi::{PhysicalPosition, Position},
    },
};
use windows::Win32::{Foundation::HWND, UI::WindowsAndMessaging::SetForegroundWindow};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    owner: isize,
}

impl TrayManager {
    /// Register the tray icon with the shell.
    ///
    /// `owner` is the hidden window that receives menu focus. Fails when the
    /// shell rejects the icon.
    #[track_caller]
    #[instrument]
    pub fn new(owner: isize, theme: IconTheme) -> AppResult<Self> {
        let icon = Self::load_icon(theme)?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(PLACEHOLDER_TOOLTIP)
            .with_icon(icon)
            .build()
            .map_err(|e| AppError::TrayIcon {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(?theme, "System tray icon initialized");

        Ok(Self { tray_icon, owner })
    }

    /// Load icon from compile-time embedded PNG bytes.
    #[track_caller]
    fn load_icon(theme: IconTheme) -> AppResult<Icon> {
        let png_bytes: &[u8] = match theme {
            IconTheme::Light => include_bytes!("../resources/icons/tray-light.png"),
            IconTheme::Dark => include_bytes!("../resources/icons/tray-dark.png"),
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::Icon {
            reason: format!("Failed to decode embedded icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::Icon {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn build_menu(model: &MenuModel) -> CoreResult<Menu> {
        let menu = Menu::new();

        for entry in model.entries() {
            let appended = match entry {
                MenuEntry::Action { action, label } => {
                    let item = MenuItem::with_id(MenuId::new(action.id()), label, true, None);
                    menu.append(&item)
                }
                MenuEntry::Separator => menu.append(&PredefinedMenuItem::separator()),
            };

            appended.map_err(|e| CoreError::Tray {
                reason: format!("Failed to add menu entry: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        }

        Ok(menu)
    }
}

impl TrayShell for TrayManager {
    #[track_caller]
    fn set_tooltip(&mut self, text: &str) -> CoreResult<()> {
        self.tray_icon
            .set_tooltip(Some(text))
            .map_err(|e| CoreError::Tray {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    #[instrument(skip(self, model))]
    fn present_menu(&mut self, model: &MenuModel, anchor: ScreenPoint) -> CoreResult<()> {
        let menu = Self::build_menu(model)?;
        let position = Position::Physical(PhysicalPosition::new(anchor.x, anchor.y));

        // The menu only dismisses on an outside click if the owner is foreground.
        unsafe {
            let _ = SetForegroundWindow(HWND(self.owner));
        }

        // Blocks in the menu's modal tracking loop until a pick or dismissal.
        let _ = unsafe { menu.show_context_menu_for_hwnd(self.owner, Some(position)) };

        debug!("Tray menu closed");
        Ok(())
    }
}

impl Drop for TrayManager {
    fn drop(&mut self) {
        info!("Removing tray icon");
    }
}
