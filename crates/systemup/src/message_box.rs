use systemup_core::{Notice, NoticeLevel, Prompter};

use windows::{
    Win32::{
        Foundation::HWND,
        UI::WindowsAndMessaging::{
            IDYES, MB_ICONERROR, MB_ICONINFORMATION, MB_ICONQUESTION, MB_ICONWARNING, MB_OK,
            MB_YESNO, MessageBoxW,
        },
    },
    core::HSTRING,
};

/// Modal `MessageBoxW` dialogs owned by the hidden event-loop window.
///
/// Each call blocks the event loop until the dialog closes.
#[derive(Debug)]
pub struct MessageBoxPrompter {
    owner: HWND,
}

impl MessageBoxPrompter {
    /// Dialogs owned by `owner`.
    pub fn new(owner: isize) -> Self {
        Self { owner: HWND(owner) }
    }
}

impl Prompter for MessageBoxPrompter {
    fn confirm(&mut self, title: &str, question: &str) -> bool {
        let answer = unsafe {
            MessageBoxW(
                self.owner,
                &HSTRING::from(question),
                &HSTRING::from(title),
                MB_YESNO | MB_ICONQUESTION,
            )
        };
        answer == IDYES
    }

    fn notify(&mut self, notice: &Notice) {
        let icon = match notice.level {
            NoticeLevel::Info => MB_ICONINFORMATION,
            NoticeLevel::Warning => MB_ICONWARNING,
            NoticeLevel::Error => MB_ICONERROR,
        };

        unsafe {
            MessageBoxW(
                self.owner,
                &HSTRING::from(notice.message.as_str()),
                &HSTRING::from(notice.title.as_str()),
                MB_OK | icon,
            );
        }
    }
}
