/// Popup controller: loads the view and runs the shortcut actions
use crate::cookie_filter::{CookieFilter, CookieScope};
use crate::error::MenuError;
use crate::host::Host;
use crate::i18n::Labels;
use crate::settings::{CreateWindowData, manager_url};
use crate::tab_context::TabContext;
use crate::version::Features;
use futures_util::future::try_join_all;
use std::cell::OnceCell;

/// Shortcuts offered by the popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Open the manager searching the current site
    SearchDomain,
    /// Open the manager without a search
    OpenManager,
    DeleteDomainCookies,
    DeleteContainerCookies,
    DeleteLocalStorage,
    OpenOptions,
}

impl Action {
    /// Id of the popup element that triggers the action
    pub fn element_id(&self) -> &'static str {
        match self {
            Action::SearchDomain => "search_cookie_manager",
            Action::OpenManager => "simple_cookie_manager",
            Action::DeleteDomainCookies => "delete_current_cookies",
            Action::DeleteContainerCookies => "delete_context_cookies",
            Action::DeleteLocalStorage => "delete_current_localstorage",
            Action::OpenOptions => "options",
        }
    }
}

/// Everything the popup displays once loaded
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub hostname: String,
    pub favicon: String,
    pub domain_cookies: usize,
    pub container_cookies: usize,
    /// None when the host cannot clear local storage per hostname
    pub local_storage_items: Option<u32>,
    pub labels: Labels,
}

/// What an action did, for logging and tests
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    TabOpened(String),
    WindowOpened(CreateWindowData),
    CookiesRemoved(usize),
    LocalStorageCleared(String),
    OptionsOpened,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupState {
    Loading,
    Ready(PopupView),
    Failed(String),
    Closed,
}

/// Data captured by `initialize` and reused by every action
#[derive(Debug, Clone)]
struct Loaded {
    tab: TabContext,
    features: Features,
}

pub struct PopupController<H: Host> {
    host: H,
    // Written once by `initialize`, read by actions afterwards.
    loaded: OnceCell<Loaded>,
}

impl<H: Host> PopupController<H> {
    pub fn new(host: H) -> Self {
        PopupController {
            host,
            loaded: OnceCell::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Query the tab, the host release and the counts, then resolve labels
    ///
    /// The local storage count and both cookie queries run together. Labels
    /// come last so the view is complete before any text is swapped.
    pub async fn initialize(&self) -> Result<PopupView, MenuError> {
        let tab = self.host.active_tab().await?;
        let hostname = tab.hostname()?;
        let favicon = tab.favicon().to_string();

        let version = self.host.browser_version().await?;
        let features = Features::from_version(&version);
        log::debug!("host version {} -> {:?}", version, features.major);

        // The storage count waits for the page to load; cookie queries must not.
        let local_storage = async {
            if features.local_storage() {
                Some(self.local_storage_count().await)
            } else {
                None
            }
        };

        let domain_filter = CookieFilter::domain(&tab, features);
        let container_filter = CookieFilter::container(&tab, features);
        let (local_storage_items, domain_cookies, container_cookies) = futures_util::join!(
            local_storage,
            self.host.get_all_cookies(&domain_filter),
            self.host.get_all_cookies(&container_filter)
        );
        let domain_cookies = domain_cookies?.len();
        let container_cookies = container_cookies?.len();

        let labels = Labels::resolve(&self.host.ui_language(), |key| self.host.message(key));

        if self.loaded.set(Loaded { tab, features }).is_err() {
            log::debug!("popup already initialized, keeping the first tab");
        }

        Ok(PopupView {
            hostname,
            favicon,
            domain_cookies,
            container_cookies,
            local_storage_items,
            labels,
        })
    }

    async fn local_storage_count(&self) -> u32 {
        match self.host.local_storage_length().await {
            Ok(count) => count,
            Err(e) => {
                log::warn!("local storage probe failed: {}", e);
                0
            }
        }
    }

    fn loaded(&self) -> Result<&Loaded, MenuError> {
        self.loaded.get().ok_or(MenuError::NotReady)
    }

    /// Run `action` and close the popup once it succeeded
    pub async fn dispatch(&self, action: Action) -> Result<Outcome, MenuError> {
        let outcome = match action {
            Action::SearchDomain => {
                let parent = self.loaded()?.tab.url.clone();
                self.open_manager(Some(&parent)).await?
            }
            Action::OpenManager => self.open_manager(None).await?,
            Action::DeleteDomainCookies => self.delete_cookies(CookieScope::Domain).await?,
            Action::DeleteContainerCookies => self.delete_cookies(CookieScope::Container).await?,
            Action::DeleteLocalStorage => self.delete_local_storage().await?,
            Action::OpenOptions => {
                self.host.open_options_page().await?;
                Outcome::OptionsOpened
            }
        };

        log::info!("{:?} done: {:?}", action, outcome);
        self.host.close_popup();
        Ok(outcome)
    }

    async fn open_manager(&self, parent_url: Option<&str>) -> Result<Outcome, MenuError> {
        let settings = self.host.read_settings().await?;

        if settings.opens_in_new_tab() {
            let url = manager_url(parent_url, false);
            self.host.create_tab(&url).await?;
            return Ok(Outcome::TabOpened(url));
        }

        let size = settings.window_size();
        log::debug!("manager window {}x{}", size.width, size.height);
        let data = CreateWindowData::panel(manager_url(parent_url, true), size);
        self.host.create_window(&data).await?;
        Ok(Outcome::WindowOpened(data))
    }

    async fn delete_cookies(&self, scope: CookieScope) -> Result<Outcome, MenuError> {
        let loaded = self.loaded()?;
        let filter = CookieFilter::for_scope(scope, &loaded.tab, loaded.features);

        let cookies = self.host.get_all_cookies(&filter).await?;
        let details: Vec<_> = cookies.iter().map(|cookie| cookie.removal_details()).collect();
        try_join_all(details.iter().map(|d| self.host.remove_cookie(d))).await?;

        Ok(Outcome::CookiesRemoved(details.len()))
    }

    // Subdomains keep their storage: the host only clears exact hostnames.
    async fn delete_local_storage(&self) -> Result<Outcome, MenuError> {
        let hostname = self.loaded()?.tab.hostname()?;
        self.host.clear_local_storage(&[hostname.clone()]).await?;
        Ok(Outcome::LocalStorageCleared(hostname))
    }
}
