use std::sync::Arc;

use async_trait::async_trait;
use commentdeck_api::SiteApi;
use commentdeck_core::Result;

/// Static identity of a sidebar view, read by the hosting shell when the
/// view is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub admin_only: bool,
}

/// Everything a view needs in order to act, passed explicitly on each
/// lifecycle call instead of read from shared state.
#[derive(Clone)]
pub struct SidebarContext {
    /// Admin API handle for the server being administered.
    pub api: Arc<dyn SiteApi>,
    /// Currently selected site name, if any. Views that are not scoped to a
    /// single site accept it and ignore it.
    pub site: Option<String>,
}

impl SidebarContext {
    pub fn new(api: Arc<dyn SiteApi>) -> Self {
        Self { api, site: None }
    }

    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = Some(site.into());
        self
    }
}

/// Lifecycle contract between the hosting shell and a sidebar view.
///
/// The shell calls `mount` whenever the view becomes visible and
/// `switch_tab` whenever the tab selector changes while the view is shown.
#[async_trait]
pub trait SidebarView: Send + Sync {
    fn descriptor(&self) -> ViewDescriptor;

    async fn mount(&self, ctx: &SidebarContext) -> Result<()>;

    async fn switch_tab(&self, tab: &str, ctx: &SidebarContext) -> Result<()>;
}
