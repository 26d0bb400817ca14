use leptos::prelude::*;

/// Collection shown by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Models,
    Experiments,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Models, Section::Experiments];

    pub fn key(self) -> &'static str {
        match self {
            Section::Models => "models",
            Section::Experiments => "experiments",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Models => "Models",
            Section::Experiments => "Experiments",
        }
    }
}

/// Shell state shared through context. Not persisted across reloads.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Section>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Section::default()),
        }
    }

    /// Switch the displayed list. Selecting the active section is a no-op,
    /// so the mounted view keeps its settled state.
    pub fn select(&self, section: Section) {
        if self.active.get_untracked() != section {
            log::debug!("switching to {}", section.key());
            self.active.set(section);
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active.get() == section
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
