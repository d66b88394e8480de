use std::sync::Mutex;

/// Non-blocking notification sink for user-facing messages.
pub trait Toaster {
    fn show(&self, message: &str);
}

/// Keeps the last shown message until dismissed.
#[derive(Debug, Default)]
pub struct Snackbar {
    message: Mutex<Option<String>>,
}

impl Snackbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> Option<String> {
        self.message
            .lock()
            .map(|message| message.clone())
            .unwrap_or_default()
    }

    pub fn dismiss(&self) {
        if let Ok(mut message) = self.message.lock() {
            *message = None;
        }
    }
}

impl Toaster for Snackbar {
    fn show(&self, message: &str) {
        if let Ok(mut current) = self.message.lock() {
            *current = Some(message.to_string());
        }
    }
}

impl<T: Toaster + ?Sized> Toaster for &T {
    fn show(&self, message: &str) {
        (**self).show(message)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_snackbar_show_and_dismiss() {
        let snackbar = Snackbar::new();
        assert_eq!(snackbar.message(), None);

        snackbar.show("first");
        snackbar.show("second");
        assert_eq!(snackbar.message().as_deref(), Some("second"));

        snackbar.dismiss();
        assert_eq!(snackbar.message(), None);
    }
}
