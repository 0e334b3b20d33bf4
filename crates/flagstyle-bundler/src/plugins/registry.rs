//! Plugin registry with execution phases.
//!
//! This module provides a plugin registry that organizes plugins by execution phase,
//! ensuring plugins run in the correct order during the build.

use std::sync::Arc;

use super::{Plugin, SharedPlugin};

/// Plugin execution phases
///
/// Plugins are executed in phase order (lower numbers first). Plugins in the
/// same phase keep their registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PluginPhase {
    /// Source generation (always first)
    ///
    /// Plugins that write files the bundler must see as inputs.
    Generate = 0,

    /// Content transformation
    ///
    /// Plugins that adjust inputs produced by earlier phases.
    Transform = 20,

    /// Post-processing of emitted output
    ///
    /// Plugins that act on the bundler's output after it finished.
    PostProcess = 100,
}

/// Plugin registry that maintains plugins in phase order
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<(PluginPhase, SharedPlugin)>,
}

impl PluginRegistry {
    /// Create a new empty plugin registry
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to the registry
    ///
    /// The plugin will be inserted based on its phase. Sorting happens once
    /// in `into_plugins()`.
    pub fn add<P: Plugin + 'static>(&mut self, plugin: P) {
        let phase = plugin.phase();
        self.plugins.push((phase, Arc::new(plugin)));
    }

    /// Add a plugin with an explicit phase
    pub fn add_with_phase(&mut self, plugin: SharedPlugin, phase: PluginPhase) {
        self.plugins.push((phase, plugin));
    }

    /// Builder-style `add`.
    pub fn with<P: Plugin + 'static>(mut self, plugin: P) -> Self {
        self.add(plugin);
        self
    }

    /// Plugins sorted by phase
    ///
    /// The sort is stable, so registration order breaks ties.
    pub fn into_plugins(mut self) -> Vec<SharedPlugin> {
        self.plugins.sort_by_key(|(phase, _)| *phase);
        self.plugins.into_iter().map(|(_, plugin)| plugin).collect()
    }

    /// Get the number of plugins in the registry
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
