//! Navigation handoff
//!
//! The lookup core only produces a name. What happens next is up to a
//! [`NavigationSink`]: the default [`NotificationSink`] just tells the user what
//! would be searched for, while [`IndexedSink`] resolves through a
//! [`SymbolIndex`] and falls back to a notification when nothing is found.

mod index;

pub use index::{DeclarationIndex, DefinitionLocation, EmptySymbolIndex, SymbolIndex};

use crate::config::PhantomJumpConfig;
use crate::symbols::ResolvedSymbol;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Result of handing a symbol to a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationOutcome {
    /// A user-facing message was emitted instead of navigating
    Reported { title: String, message: String },
    /// One or more definitions were found
    Resolved {
        symbol: ResolvedSymbol,
        definitions: Vec<DefinitionLocation>,
    },
}

/// Consumer of symbols found under the cursor
pub trait NavigationSink {
    fn navigate(&self, symbol: &ResolvedSymbol) -> NavigationOutcome;
}

/// Sink that only reports the symbol back to the user
#[derive(Debug, Clone)]
pub struct NotificationSink {
    title: String,
}

impl Default for NotificationSink {
    fn default() -> Self {
        Self::new("PhantomJump")
    }
}

impl NotificationSink {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn report(&self, message: String) -> NavigationOutcome {
        info!(title = %self.title, "{}", message);
        NavigationOutcome::Reported {
            title: self.title.clone(),
            message,
        }
    }
}

impl From<&PhantomJumpConfig> for NotificationSink {
    fn from(config: &PhantomJumpConfig) -> Self {
        Self::new(config.notification_title.clone())
    }
}

impl NavigationSink for NotificationSink {
    fn navigate(&self, symbol: &ResolvedSymbol) -> NavigationOutcome {
        self.report(format!(
            "Searching for symbol: '{}' (Feature in development)",
            symbol.name
        ))
    }
}

/// Sink that looks definitions up in an index
pub struct IndexedSink<I: SymbolIndex> {
    index: I,
    notifier: NotificationSink,
}

impl<I: SymbolIndex> IndexedSink<I> {
    pub fn new(index: I, notifier: NotificationSink) -> Self {
        Self { index, notifier }
    }

    pub fn index(&self) -> &I {
        &self.index
    }
}

impl<I: SymbolIndex> NavigationSink for IndexedSink<I> {
    fn navigate(&self, symbol: &ResolvedSymbol) -> NavigationOutcome {
        let mut definitions = self.index.find_definitions(&symbol.name, symbol.kind);
        if definitions.is_empty() && symbol.kind.is_some() {
            // The kind is a casing heuristic; retry without it before giving up
            definitions = self.index.find_definitions(&symbol.name, None);
        }

        if definitions.is_empty() {
            return self
                .notifier
                .report(format!("No definition found for symbol: '{}'", symbol.name));
        }

        info!(
            "Resolved '{}' to {} definition(s)",
            symbol.name,
            definitions.len()
        );
        NavigationOutcome::Resolved {
            symbol: symbol.clone(),
            definitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SymbolKind;

    fn symbol(name: &str, kind: Option<SymbolKind>) -> ResolvedSymbol {
        ResolvedSymbol {
            name: name.to_string(),
            kind,
            start_offset: 0,
            end_offset: name.len(),
        }
    }

    #[test]
    fn test_notification_sink_reports() {
        let sink = NotificationSink::default();
        let outcome = sink.navigate(&symbol("Foo", Some(SymbolKind::Class)));
        assert_eq!(
            outcome,
            NavigationOutcome::Reported {
                title: "PhantomJump".to_string(),
                message: "Searching for symbol: 'Foo' (Feature in development)".to_string(),
            }
        );
    }

    #[test]
    fn test_indexed_sink_resolves() {
        let mut index = DeclarationIndex::new();
        index
            .add_document("shapes.ts", "export class Circle {}\nfunction area(c) {}\n")
            .unwrap();
        let sink = IndexedSink::new(index, NotificationSink::default());

        match sink.navigate(&symbol("Circle", Some(SymbolKind::Class))) {
            NavigationOutcome::Resolved { definitions, .. } => {
                assert_eq!(definitions.len(), 1);
                assert_eq!(definitions[0].file_path, "shapes.ts");
            }
            other => panic!("expected a resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_indexed_sink_retries_without_kind() {
        let mut index = DeclarationIndex::new();
        index
            .add_document("shapes.js", "function area(c) { return 0; }\n")
            .unwrap();
        let sink = IndexedSink::new(index, NotificationSink::default());

        // Mentioned without parentheses, so classified as a variable
        let outcome = sink.navigate(&symbol("area", Some(SymbolKind::Variable)));
        assert!(matches!(outcome, NavigationOutcome::Resolved { .. }));
    }

    #[test]
    fn test_indexed_sink_falls_back_to_notification() {
        let sink = IndexedSink::new(EmptySymbolIndex, NotificationSink::new("Jump"));
        let outcome = sink.navigate(&symbol("missing", None));
        assert_eq!(
            outcome,
            NavigationOutcome::Reported {
                title: "Jump".to_string(),
                message: "No definition found for symbol: 'missing'".to_string(),
            }
        );
    }
}
