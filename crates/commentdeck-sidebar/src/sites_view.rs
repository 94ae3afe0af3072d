use std::sync::Arc;

use async_trait::async_trait;
use commentdeck_core::Result;
use parking_lot::Mutex;
use tracing::debug;

use crate::site_list::SiteList;
use crate::view::{SidebarContext, SidebarView, ViewDescriptor};

/// The "Sites" administrative tab.
///
/// Owns a single `SiteList` created on first mount and refreshes it from the
/// server whenever the view is mounted or its tab is reselected.
pub struct SitesView {
    site_list: Mutex<Option<Arc<SiteList>>>,
}

impl SitesView {
    pub const DESCRIPTOR: ViewDescriptor = ViewDescriptor {
        name: "sites",
        title: "Sites",
        admin_only: true,
    };

    pub fn new() -> Self {
        Self {
            site_list: Mutex::new(None),
        }
    }

    /// The owned list renderer, None until the first mount.
    pub fn site_list(&self) -> Option<Arc<SiteList>> {
        self.site_list.lock().clone()
    }

    /// Create the list renderer the first time the view is shown. Subsequent
    /// mounts keep the existing instance.
    fn ensure_site_list(&self) -> Arc<SiteList> {
        let mut slot = self.site_list.lock();
        slot.get_or_insert_with(|| Arc::new(SiteList::new())).clone()
    }

    /// Fetch the current site collection and hand it to the list wholesale.
    ///
    /// Overlapping calls are not coalesced; whichever response arrives last
    /// determines the displayed content. A fetch failure propagates to the
    /// caller and leaves the displayed content untouched.
    async fn req_sites(&self, ctx: &SidebarContext) -> Result<()> {
        let sites = ctx.api.site_get().await?;
        debug!("Refreshing site list with {} records", sites.len());
        if let Some(list) = self.site_list() {
            list.load_sites(sites);
        }
        Ok(())
    }
}

impl Default for SitesView {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SidebarView for SitesView {
    fn descriptor(&self) -> ViewDescriptor {
        Self::DESCRIPTOR
    }

    async fn mount(&self, ctx: &SidebarContext) -> Result<()> {
        self.ensure_site_list();
        self.req_sites(ctx).await
    }

    async fn switch_tab(&self, _tab: &str, ctx: &SidebarContext) -> Result<()> {
        self.req_sites(ctx).await
    }
}
