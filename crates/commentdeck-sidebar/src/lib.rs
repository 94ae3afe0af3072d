pub mod site_list;
pub mod sites_view;
pub mod view;

pub use site_list::SiteList;
pub use sites_view::SitesView;
pub use view::{SidebarContext, SidebarView, ViewDescriptor};
