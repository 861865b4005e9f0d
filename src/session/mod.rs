//! Per-user session state and the Generate / Copy / Reset actions.
//!
//! Every action takes the session explicitly, along with whatever
//! collaborators it needs (catalog source, RNG, clipboard, notifier), so the
//! UI layer holds no state of its own beyond the session value.

use std::fmt;

use rand::Rng;
use zeroize::{Zeroize, Zeroizing};

use crate::catalog::{CatalogSource, ClassId};
use crate::clipboard::Clipboard;
use crate::notify::{Notifier, Severity};
use crate::pass::{self, GenerationError, Selection};
use crate::settings::{DEFAULT_LENGTH, MAX_LENGTH, MIN_LENGTH};

pub struct Session {
    selection: Selection,
    length: usize,
    output: Zeroizing<String>,
    error: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let output = if self.output.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("Session")
            .field("selection", &self.selection)
            .field("length", &self.length)
            .field("output", &output)
            .field("error", &self.error)
            .finish()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            selection: ClassId::ALL.into_iter().collect(),
            length: DEFAULT_LENGTH,
            output: Zeroizing::new(String::new()),
            error: String::new(),
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session starting from explicit options. `length` is taken as-is.
    pub fn configured(selection: Selection, length: usize) -> Self {
        Self {
            selection,
            length,
            ..Self::default()
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_enabled(&self, class: ClassId) -> bool {
        self.selection.contains(&class)
    }

    pub fn set_enabled(&mut self, class: ClassId, enabled: bool) {
        if enabled {
            self.selection.insert(class);
        } else {
            self.selection.remove(&class);
        }
    }

    pub fn toggle(&mut self, class: ClassId) {
        let enabled = self.is_enabled(class);
        self.set_enabled(class, !enabled);
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Set the length, clamped to the interactive range.
    pub fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    /// Last generated password, empty when there is none.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Persistent error message, empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    fn clear_output(&mut self) {
        self.output.zeroize();
    }

    /// Generate a password into the session.
    ///
    /// Input mistakes (no class selected, zero length) raise a warning
    /// notice. Data problems (catalog unreadable, empty pool) are kept as
    /// the persistent error. Any failure clears the previous password.
    pub fn generate<S, R, N>(
        &mut self,
        source: &S,
        rng: &mut R,
        notifier: &mut N,
    ) -> Result<(), GenerationError>
    where
        S: CatalogSource + ?Sized,
        R: Rng,
        N: Notifier + ?Sized,
    {
        self.error.clear();

        let result = self.try_generate(source, rng);
        match result {
            Ok(password) => {
                tracing::debug!(
                    length = self.length,
                    classes = self.selection.len(),
                    "password generated"
                );
                self.clear_output();
                self.output = password;
                Ok(())
            }
            Err(e) => {
                self.clear_output();
                if e.is_input_error() {
                    tracing::debug!(error = %e, "generation refused");
                    notifier.notify(&e.to_string(), Severity::Warning);
                } else {
                    tracing::debug!(error = %e, "generation failed");
                    self.error = e.to_string();
                }
                Err(e)
            }
        }
    }

    fn try_generate<S, R>(
        &self,
        source: &S,
        rng: &mut R,
    ) -> Result<Zeroizing<String>, GenerationError>
    where
        S: CatalogSource + ?Sized,
        R: Rng,
    {
        // Selection is checked before touching the data file.
        if self.selection.is_empty() {
            return Err(GenerationError::NoClassSelected);
        }
        let catalog = source.load()?;
        pass::generate(&self.selection, self.length, &catalog, rng)
    }

    /// Copy the last generated password to `clipboard`.
    pub fn copy<C, N>(&self, clipboard: &mut C, notifier: &mut N)
    where
        C: Clipboard + ?Sized,
        N: Notifier + ?Sized,
    {
        if self.output.is_empty() {
            notifier.notify("Nothing to copy: generate a password first.", Severity::Info);
            return;
        }

        match clipboard.copy(&self.output) {
            Ok(()) => notifier.notify("Password copied to clipboard!", Severity::Success),
            Err(e) => {
                tracing::debug!(error = %e, "clipboard copy failed");
                notifier.notify(&format!("Unable to copy to clipboard ({e})."), Severity::Error);
            }
        }
    }

    /// Restore defaults: every class enabled, default length, nothing shown.
    pub fn reset<N: Notifier + ?Sized>(&mut self, notifier: &mut N) {
        self.clear_output();
        *self = Self::default();
        notifier.notify("Settings reset.", Severity::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogError, DataFile};
    use crate::clipboard::ClipboardError;
    use crate::notify::Notices;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct FakeClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl Clipboard for FakeClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable("no display".into()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5)
    }

    fn catalog() -> Catalog {
        Catalog::new()
            .with_class(ClassId::Lower, "abc")
            .with_class(ClassId::Digit, "123")
    }

    #[test]
    fn defaults() {
        let session = Session::new();
        for class in ClassId::ALL {
            assert!(session.is_enabled(class));
        }
        assert_eq!(session.length(), 16);
        assert_eq!(session.output(), "");
        assert_eq!(session.error(), "");
    }

    #[test]
    fn generate_fills_output() {
        let mut session = Session::configured(Selection::from([ClassId::Lower, ClassId::Digit]), 5);
        let mut notices = Notices::new();
        session.generate(&catalog(), &mut rng(), &mut notices).unwrap();

        assert_eq!(session.output().chars().count(), 5);
        assert!(session.output().chars().all(|c| "abc123".contains(c)));
        assert!(notices.drain().is_empty());
        assert_eq!(session.error(), "");
    }

    #[test]
    fn no_class_selected_is_transient() {
        let mut session = Session::configured(Selection::from([ClassId::Lower]), 8);
        let mut notices = Notices::new();
        session.generate(&catalog(), &mut rng(), &mut notices).unwrap();
        assert!(!session.output().is_empty());

        session.toggle(ClassId::Lower);
        let err = session.generate(&catalog(), &mut rng(), &mut notices).unwrap_err();
        assert!(matches!(err, GenerationError::NoClassSelected));
        assert_eq!(session.output(), "");
        assert_eq!(session.error(), "");

        let drained = notices.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].severity, Severity::Warning);
    }

    #[test]
    fn no_class_selected_skips_catalog() {
        struct Unreachable;
        impl CatalogSource for Unreachable {
            fn load(&self) -> Result<Catalog, CatalogError> {
                panic!("catalog must not be loaded");
            }
        }

        let mut session = Session::configured(Selection::new(), 16);
        let err = session
            .generate(&Unreachable, &mut rng(), &mut Notices::new())
            .unwrap_err();
        assert!(matches!(err, GenerationError::NoClassSelected));
    }

    #[test]
    fn empty_pool_is_persistent() {
        let mut session = Session::configured(Selection::from([ClassId::Symbol]), 16);
        let mut notices = Notices::new();
        let err = session.generate(&catalog(), &mut rng(), &mut notices).unwrap_err();

        assert!(matches!(err, GenerationError::EmptyPool));
        assert_eq!(session.output(), "");
        assert!(session.error().contains("no characters"));
        assert!(notices.drain().is_empty());
    }

    #[test]
    fn missing_catalog_is_persistent_until_next_success() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let source = DataFile::new(&path);

        let mut session = Session::new();
        let mut notices = Notices::new();
        let err = session.generate(&source, &mut rng(), &mut notices).unwrap_err();
        assert!(matches!(err, GenerationError::CatalogUnavailable(_)));
        assert!(session.error().contains("data.json"));
        assert_eq!(session.output(), "");

        std::fs::write(&path, r#"{"latin_lower_alphabet": "xyz"}"#).unwrap();
        session.generate(&source, &mut rng(), &mut notices).unwrap();
        assert_eq!(session.error(), "");
        assert_eq!(session.output().chars().count(), 16);
        assert!(session.output().chars().all(|c| "xyz".contains(c)));
    }

    #[test]
    fn debug_hides_password() {
        let mut session = Session::configured(Selection::from([ClassId::Digit]), 24);
        session.generate(&catalog(), &mut rng(), &mut Notices::new()).unwrap();

        let shown = format!("{session:?}");
        assert!(!shown.contains(session.output()));
        assert!(shown.contains("<redacted>"));
        assert!(shown.contains("length: 24"));
    }

    #[test]
    fn set_length_clamps() {
        let mut session = Session::new();
        session.set_length(4);
        assert_eq!(session.length(), 12);
        session.set_length(500);
        assert_eq!(session.length(), 100);
        session.set_length(40);
        assert_eq!(session.length(), 40);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = Session::configured(Selection::from([ClassId::Digit]), 30);
        let mut notices = Notices::new();
        session.generate(&catalog(), &mut rng(), &mut notices).unwrap();
        session.set_enabled(ClassId::Digit, false);
        let _ = session.generate(&Catalog::new(), &mut rng(), &mut notices);

        session.reset(&mut notices);

        for class in ClassId::ALL {
            assert!(session.is_enabled(class));
        }
        assert_eq!(session.length(), 16);
        assert_eq!(session.output(), "");
        assert_eq!(session.error(), "");
        let last = notices.drain().pop().unwrap();
        assert_eq!(last.severity, Severity::Success);
    }

    #[test]
    fn copy_without_password() {
        let session = Session::new();
        let mut clipboard = FakeClipboard::default();
        let mut notices = Notices::new();
        session.copy(&mut clipboard, &mut notices);

        assert!(clipboard.contents.is_none());
        assert_eq!(notices.drain()[0].severity, Severity::Info);
    }

    #[test]
    fn copy_last_password() {
        let mut session = Session::new();
        let mut notices = Notices::new();
        session
            .generate(&Catalog::builtin().unwrap(), &mut rng(), &mut notices)
            .unwrap();

        let mut clipboard = FakeClipboard::default();
        session.copy(&mut clipboard, &mut notices);
        assert_eq!(clipboard.contents.as_deref(), Some(session.output()));
        assert_eq!(notices.drain()[0].severity, Severity::Success);
    }

    #[test]
    fn copy_failure_is_reported() {
        let mut session = Session::new();
        let mut notices = Notices::new();
        session
            .generate(&Catalog::builtin().unwrap(), &mut rng(), &mut notices)
            .unwrap();

        let mut clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };
        session.copy(&mut clipboard, &mut notices);
        let notice = notices.drain().pop().unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.message.contains("no display"));
    }
}
