use crate::monitor::MonitorOptions;
use crate::steam::SteamLayout;

#[derive(Debug, Clone)]
pub struct WatchParams {
    pub layout: SteamLayout,
    pub options: MonitorOptions,
}

#[derive(Debug, Clone)]
pub struct StatusParams {
    pub layout: SteamLayout,
}
