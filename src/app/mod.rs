pub mod handlers;
pub mod pointer;
pub mod theme;
pub mod ui_components;
pub mod view;

use crate::app::pointer::PointerHub;
use crate::app::theme::AppTheme;
use iced::{Element, Task};
use std::rc::Rc;
use tokswap::config::AppConfig;
use tokswap::core::feed::{FetchGate, FetchTicket};
use tokswap::core::item::IconResolver;
use tokswap::core::prices::PriceTable;
use tokswap::core::selection::{RegionId, SelectionController};
use tokswap::core::swap::{Side, SwapForm};
use tokswap::core::wallet::{BalanceEntry, WalletView};

pub struct State {
    pub config: AppConfig,
    pub theme: AppTheme,
    pub icons: IconResolver,
    pub active_tab: Tab,
    pub feed: FeedStatus,
    pub fetch_gate: FetchGate,
    pub form: SwapForm,
    pub pointer: PointerHub,
    pub from_picker: SelectionController,
    pub to_picker: SelectionController,
    pub wallet: WalletView,
    /// Why the configured wallet file could not be used, if it couldn't
    pub wallet_error: Option<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumIter,
)]
pub enum Tab {
    #[default]
    Converter,
    Wallet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    RefreshPrices,
    PricesLoaded(FetchTicket, Result<PriceTable, String>),
    WalletLoaded(Result<Vec<BalanceEntry>, String>),
    PickerToggled(Side),
    PickerSearchChanged(Side, String),
    PickerItemSelected(Side, String),
    PickerHovered(Side, bool),
    AmountChanged(String),
    SwapClicked,
    EventOccurred(iced::Event),
}

/// Screen region owned by each side's picker.
pub fn region_of(side: Side) -> RegionId {
    match side {
        Side::From => RegionId(1),
        Side::To => RegionId(2),
    }
}

impl State {
    pub fn new() -> (Self, Task<Message>) {
        let config = tokswap::config::load_config_blocking();
        let mut state = Self::from_config(config);

        let fetch = handlers::handle_refresh_prices(&mut state);
        let wallet = handlers::load_wallet_task(&state.config);
        (state, Task::batch([fetch, wallet]))
    }

    /// Builds the initial state without starting any background work.
    pub fn from_config(config: AppConfig) -> Self {
        let pointer = PointerHub::default();
        let shared: Rc<dyn tokswap::core::selection::OutsidePointer> = Rc::new(pointer.clone());
        let mut from_picker = SelectionController::new(region_of(Side::From), Rc::clone(&shared));
        let mut to_picker = SelectionController::new(region_of(Side::To), shared);
        from_picker.start();
        to_picker.start();

        let mut state = Self {
            icons: IconResolver::new(config.icon_base_url.clone()),
            form: SwapForm::new(config.default_from.clone(), config.default_to.clone()),
            wallet: WalletView::new(
                tokswap::core::wallet::sample_balances(),
                config.blockchain_priority.clone(),
            ),
            config,
            theme: AppTheme::default(),
            active_tab: Tab::default(),
            feed: FeedStatus::default(),
            fetch_gate: FetchGate::default(),
            pointer,
            from_picker,
            to_picker,
            wallet_error: None,
        };
        state.refresh_derived();
        state
    }

    pub fn picker(&self, side: Side) -> &SelectionController {
        match side {
            Side::From => &self.from_picker,
            Side::To => &self.to_picker,
        }
    }

    pub fn picker_mut(&mut self, side: Side) -> &mut SelectionController {
        match side {
            Side::From => &mut self.from_picker,
            Side::To => &mut self.to_picker,
        }
    }

    /// Side whose picker is currently open, if any.
    pub fn open_side(&self) -> Option<Side> {
        [Side::From, Side::To]
            .into_iter()
            .find(|side| self.picker(*side).is_open())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => handlers::handle_tab_selected(self, tab),
            Message::RefreshPrices => {
                let task = handlers::handle_refresh_prices(self);
                self.refresh_derived();
                return task;
            }
            Message::PricesLoaded(ticket, result) => {
                handlers::handle_prices_loaded(self, ticket, result);
            }
            Message::WalletLoaded(result) => handlers::handle_wallet_loaded(self, result),
            Message::PickerToggled(side) => handlers::handle_picker_toggled(self, side),
            Message::PickerSearchChanged(side, query) => {
                handlers::handle_picker_search(self, side, query);
            }
            Message::PickerItemSelected(side, key) => {
                handlers::handle_picker_select(self, side, &key);
            }
            Message::PickerHovered(side, inside) => {
                handlers::handle_picker_hovered(self, side, inside);
            }
            Message::AmountChanged(input) => handlers::handle_amount_changed(self, input),
            Message::SwapClicked => handlers::handle_swap(self),
            Message::EventOccurred(event) => self.handle_event(event),
        }
        self.refresh_derived();
        Task::none()
    }

    /// Brings memoized lists up to date so `view` can read them by reference.
    fn refresh_derived(&mut self) {
        let _ = self.wallet.rows();
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn handle_event(&mut self, event: iced::Event) {
        match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(_)) => {
                handlers::handle_pointer_pressed(self);
            }
            iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
                if let Some(side) = self.open_side() {
                    handlers::handle_picker_key(self, side, key.as_ref());
                }
            }
            _ => {}
        }
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Captured events count too: a press on another button is still
        // outside the open picker.
        iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Mouse(iced::mouse::Event::ButtonPressed(_))
            | iced::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. }) => {
                Some(Message::EventOccurred(event))
            }
            _ => None,
        })
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.fetch_gate.close();
        self.from_picker.stop();
        self.to_picker.stop();
    }
}
