//! Host registry adapter.
//!
//! Configuration frameworks load values through pluggable providers keyed by
//! scheme. This module exposes the credential resolver in that shape: a
//! factory that builds a provider from opaque settings, and a provider with
//! `resolve`, `scheme` and `shutdown`.
//!
//! The adapter adds nothing to resolution. The context is accepted and
//! ignored, and the watcher is never called since credentials are not
//! watched for changes.

use std::collections::BTreeMap;

use crate::core::directory::DirectorySource;
use crate::core::resolver::Resolver;
use crate::core::retrieved::Retrieved;
use crate::error::ResolveError;

/// Per-call context handed over by the host.
///
/// Resolution is synchronous and local, so nothing here is consulted.
#[derive(Debug, Default, Clone)]
pub struct Context {
    _private: (),
}

impl Context {
    pub fn background() -> Self {
        Self::default()
    }
}

/// Notification that a previously retrieved value changed.
///
/// Only part of the watcher signature; this crate never emits one.
#[derive(Debug)]
pub struct ChangeEvent {
    pub error: Option<ResolveError>,
}

/// Callback a host registers to hear about changed values.
pub type WatcherFn = dyn Fn(ChangeEvent) + Send + Sync;

/// Opaque settings a host passes when creating providers.
#[derive(Debug, Default, Clone)]
pub struct ProviderSettings {
    pub options: BTreeMap<String, String>,
}

/// A scheme-keyed configuration value provider.
pub trait Provider: Send + Sync {
    /// Resolve `uri` to a value.
    ///
    /// # Errors
    ///
    /// Returns a `ResolveError` describing the first failing step.
    fn resolve(
        &self,
        ctx: &Context,
        uri: &str,
        watcher: Option<&WatcherFn>,
    ) -> Result<Retrieved, ResolveError>;

    /// Scheme this provider is registered under.
    fn scheme(&self) -> &str;

    /// Release held resources.
    ///
    /// # Errors
    ///
    /// Implementations that hold resources report release failures here.
    fn shutdown(&self, ctx: &Context) -> Result<(), ResolveError>;
}

/// Builds providers for a host registry.
pub trait ProviderFactory {
    fn create(&self, settings: &ProviderSettings) -> Box<dyn Provider>;
}

/// Provider reading `systemdcredential:NAME` from `$CREDENTIALS_DIRECTORY`.
pub struct CredentialProvider {
    resolver: Resolver,
}

impl CredentialProvider {
    pub fn new() -> Self {
        Self {
            resolver: Resolver::new(),
        }
    }

    /// A provider reading the directory from `source` instead of the
    /// environment.
    pub fn with_source(source: impl DirectorySource + 'static) -> Self {
        Self {
            resolver: Resolver::with_source(source),
        }
    }
}

impl Default for CredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for CredentialProvider {
    fn resolve(
        &self,
        _ctx: &Context,
        uri: &str,
        _watcher: Option<&WatcherFn>,
    ) -> Result<Retrieved, ResolveError> {
        self.resolver.resolve(uri)
    }

    fn scheme(&self) -> &str {
        self.resolver.scheme()
    }

    fn shutdown(&self, _ctx: &Context) -> Result<(), ResolveError> {
        Ok(())
    }
}

/// Factory producing [`CredentialProvider`]s. Settings are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct CredentialProviderFactory;

impl ProviderFactory for CredentialProviderFactory {
    fn create(&self, _settings: &ProviderSettings) -> Box<dyn Provider> {
        Box::new(CredentialProvider::new())
    }
}

/// The factory a host registers for the `systemdcredential` scheme.
pub fn new_factory() -> CredentialProviderFactory {
    CredentialProviderFactory
}
