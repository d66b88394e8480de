use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use super::widgets::{Modal, Toggle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibrarySettings {
    pub show_download_badges: bool,
    pub show_unread_badges: bool,
    pub show_number_of_novels: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            show_download_badges: true,
            show_unread_badges: true,
            show_number_of_novels: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Download,
    Unread,
    NumberOfNovels,
}

impl Badge {
    pub const ALL: [Badge; 3] = [Badge::Download, Badge::Unread, Badge::NumberOfNovels];

    pub fn label(self) -> &'static str {
        match self {
            Badge::Download => "Download badges",
            Badge::Unread => "Unread badges",
            Badge::NumberOfNovels => "Show number of items",
        }
    }

    fn flag(self, settings: &mut LibrarySettings) -> &mut bool {
        match self {
            Badge::Download => &mut settings.show_download_badges,
            Badge::Unread => &mut settings.show_unread_badges,
            Badge::NumberOfNovels => &mut settings.show_number_of_novels,
        }
    }
}

impl LibrarySettings {
    pub fn get(&self, badge: Badge) -> bool {
        match badge {
            Badge::Download => self.show_download_badges,
            Badge::Unread => self.show_unread_badges,
            Badge::NumberOfNovels => self.show_number_of_novels,
        }
    }

    pub fn toggle(&mut self, badge: Badge) {
        let flag = badge.flag(self);
        *flag = !*flag;
    }
}

/// Library display modal with one checkbox per badge.
pub struct NovelBadgesModal<'a> {
    pub modal: Modal<'a>,
    pub checkboxes: Vec<Toggle<'a>>,
}

impl<'a> NovelBadgesModal<'a> {
    pub const TITLE: &'static str = "Badges";

    pub fn new(visible: bool, settings: &'a RefCell<LibrarySettings>) -> Self {
        let current = *settings.borrow();
        let checkboxes = Badge::ALL
            .into_iter()
            .map(|badge| {
                Toggle::checkbox(badge.label(), current.get(badge)).on_press(move || {
                    settings.borrow_mut().toggle(badge);
                })
            })
            .collect();

        Self {
            modal: Modal::new(visible),
            checkboxes,
        }
    }

    pub fn on_dismiss(mut self, f: impl FnMut() + 'a) -> Self {
        self.modal = self.modal.on_dismiss(f);
        self
    }
}
