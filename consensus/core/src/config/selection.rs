//! Process-wide selection of the active chain parameters.
//!
//! A node runs on exactly one network for its whole lifetime. The first
//! successful [`select_params`] installs that network's [`Params`]; after that
//! the set can be read from any thread through [`params`] and can never be
//! replaced.

use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use super::params::{assert_distinct_networks, Params};
use crate::errors::SelectionError;
use crate::network::NetworkType;

/// The two startup switches that choose a non-production network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NetworkFlags {
    pub testnet: bool,
    pub regtest: bool,
}

impl NetworkFlags {
    pub fn new(testnet: bool, regtest: bool) -> Self {
        Self { testnet, regtest }
    }

    /// Neither flag selects mainnet; both at once is rejected.
    pub fn resolve(self) -> Result<NetworkType, SelectionError> {
        match (self.testnet, self.regtest) {
            (false, false) => Ok(NetworkType::Mainnet),
            (true, false) => Ok(NetworkType::Testnet),
            (false, true) => Ok(NetworkType::Regtest),
            (true, true) => Err(SelectionError::ConflictingNetworkFlags),
        }
    }
}

/// Write-once holder of the active parameter set.
///
/// `Unselected` until the first successful [`select`](Self::select), then
/// `Selected` for good.
pub struct ParamsSelector {
    active: OnceCell<Params>,
}

impl ParamsSelector {
    pub const fn new() -> Self {
        Self { active: OnceCell::new() }
    }

    /// Installs the parameters of `network`.
    ///
    /// Selecting the already active network again returns the installed set.
    /// Any other network is refused once a selection has happened.
    pub fn select(&self, network: NetworkType) -> Result<&Params, SelectionError> {
        let mut installed = false;
        let active = self.active.get_or_init(|| {
            assert_distinct_networks();
            installed = true;
            Params::new(network)
        });

        if active.network() != network {
            warn!("Refusing to switch chain parameters from {} to {}", active.network(), network);
            return Err(SelectionError::AlreadySelected { active: active.network(), requested: network });
        }

        if installed {
            info!(
                "Selected {} chain parameters (genesis {}, p2p port {}, rpc port {})",
                network,
                active.genesis_hash(),
                active.default_port(),
                active.rpc_port()
            );
        } else {
            debug!("{} chain parameters already selected", network);
        }
        Ok(active)
    }

    /// Resolves the startup flags and selects the resulting network.
    ///
    /// Returns false, leaving the selector untouched, when both flags are set.
    pub fn select_from_flags(&self, flags: NetworkFlags) -> bool {
        let network = match flags.resolve() {
            Ok(network) => network,
            Err(err) => {
                error!("{err}");
                return false;
            }
        };
        match self.select(network) {
            Ok(_) => true,
            Err(err) => {
                error!("{err}");
                false
            }
        }
    }

    /// The active parameters.
    ///
    /// # Panics
    /// If no network was selected yet.
    pub fn current(&self) -> &Params {
        match self.active.get() {
            Some(params) => params,
            None => panic!("chain parameters read before a network was selected"),
        }
    }

    pub fn try_current(&self) -> Option<&Params> {
        self.active.get()
    }

    /// # Panics
    /// If no network was selected yet.
    pub fn current_network(&self) -> NetworkType {
        self.current().network()
    }

    pub fn is_selected(&self) -> bool {
        self.active.get().is_some()
    }
}

impl Default for ParamsSelector {
    fn default() -> Self {
        Self::new()
    }
}

static SELECTOR: ParamsSelector = ParamsSelector::new();

/// Selects the network of this process, see [`ParamsSelector::select`].
pub fn select_params(network: NetworkType) -> Result<&'static Params, SelectionError> {
    SELECTOR.select(network)
}

/// Resolves startup flags and selects the network of this process.
pub fn select_params_from_flags(flags: NetworkFlags) -> bool {
    SELECTOR.select_from_flags(flags)
}

/// Parameters of the selected network. Panics before selection.
pub fn params() -> &'static Params {
    SELECTOR.current()
}

pub fn try_params() -> Option<&'static Params> {
    SELECTOR.try_current()
}

/// Panics before selection.
pub fn current_network() -> NetworkType {
    SELECTOR.current_network()
}

pub fn params_selected() -> bool {
    SELECTOR.is_selected()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;

    #[test]
    fn test_flag_resolution() {
        assert_eq!(NetworkFlags::new(false, false).resolve(), Ok(NetworkType::Mainnet));
        assert_eq!(NetworkFlags::new(true, false).resolve(), Ok(NetworkType::Testnet));
        assert_eq!(NetworkFlags::new(false, true).resolve(), Ok(NetworkType::Regtest));
        assert_eq!(NetworkFlags::new(true, true).resolve(), Err(SelectionError::ConflictingNetworkFlags));
    }

    #[test]
    fn test_select_then_read() {
        let selector = ParamsSelector::new();
        assert!(!selector.is_selected());
        assert!(selector.try_current().is_none());

        let params = selector.select(NetworkType::Testnet).unwrap();
        assert_eq!(params.network(), NetworkType::Testnet);
        assert!(selector.is_selected());
        assert_eq!(selector.current_network(), NetworkType::Testnet);
        assert_eq!(selector.current().default_port(), 20888);
    }

    #[test]
    fn test_reselect_same_network_is_noop() {
        let selector = ParamsSelector::new();
        let first = selector.select(NetworkType::Regtest).unwrap() as *const Params;
        let second = selector.select(NetworkType::Regtest).unwrap() as *const Params;
        assert_eq!(first, second);
    }

    #[test]
    fn test_reselect_other_network_fails() {
        let selector = ParamsSelector::new();
        selector.select(NetworkType::Mainnet).unwrap();
        let err = selector.select(NetworkType::Regtest).unwrap_err();
        assert_eq!(err, SelectionError::AlreadySelected { active: NetworkType::Mainnet, requested: NetworkType::Regtest });
        assert_eq!(selector.current_network(), NetworkType::Mainnet);
    }

    #[test]
    #[should_panic(expected = "chain parameters read before a network was selected")]
    fn test_current_before_select_panics() {
        ParamsSelector::new().current();
    }

    #[test]
    #[should_panic(expected = "chain parameters read before a network was selected")]
    fn test_current_network_before_select_panics() {
        ParamsSelector::default().current_network();
    }

    #[test]
    fn test_conflicting_flags_leave_selector_unselected() {
        let selector = ParamsSelector::new();
        assert!(!selector.select_from_flags(NetworkFlags::new(true, true)));
        assert!(!selector.is_selected());

        assert!(selector.select_from_flags(NetworkFlags::default()));
        assert_eq!(selector.current_network(), NetworkType::Mainnet);
    }

    #[test]
    fn test_flags_after_selection() {
        let selector = ParamsSelector::new();
        assert!(selector.select_from_flags(NetworkFlags::new(false, true)));
        assert!(selector.select_from_flags(NetworkFlags::new(false, true)));
        assert!(!selector.select_from_flags(NetworkFlags::new(true, false)));
        assert_eq!(selector.current_network(), NetworkType::Regtest);
    }

    #[test]
    fn test_concurrent_readers_see_one_set() {
        let selector = ParamsSelector::new();
        selector.select(NetworkType::Regtest).unwrap();
        let expected = selector.current() as *const Params as usize;

        let barrier = Barrier::new(8);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    barrier.wait();
                    for _ in 0..100 {
                        let current = selector.current();
                        assert_eq!(current as *const Params as usize, expected);
                        assert_eq!(current.network(), NetworkType::Regtest);
                    }
                });
            }
        });
    }

    #[test]
    fn test_concurrent_first_selection_installs_once() {
        let selector = ParamsSelector::new();
        let barrier = Barrier::new(6);
        let results: Vec<_> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..6)
                .map(|i| {
                    let network = if i % 2 == 0 { NetworkType::Testnet } else { NetworkType::Regtest };
                    let selector = &selector;
                    let barrier = &barrier;
                    s.spawn(move || {
                        barrier.wait();
                        selector.select(network).map(Params::network)
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winner = selector.current_network();
        for result in results {
            match result {
                Ok(network) => assert_eq!(network, winner),
                Err(SelectionError::AlreadySelected { active, .. }) => assert_eq!(active, winner),
                Err(other) => panic!("unexpected error {other}"),
            }
        }
    }

    #[test]
    fn test_flags_deserialize_with_defaults() {
        let flags: NetworkFlags = serde_json::from_str(r#"{"regtest": true}"#).unwrap();
        assert_eq!(flags, NetworkFlags::new(false, true));
    }
}
