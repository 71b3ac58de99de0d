use anyhow::Context;
use iced::widget::{column, container, row, text};
use iced::{Element, Length, Size, Subscription, Task, window};

use gutter_layout::{
    ConfigLoadStatus, FileStore, Layout, LayoutConfig, MemoryStore, MenuEvent,
    MenuPlacement, SharedStore, load_config, shared,
};

use crate::surface::{Markup, MenuMarkup, SidebarMarkup};
use crate::ui::widgets::section_menu::SectionMenuEvent;
use crate::ui::widgets::sidebar::{self, SidebarEvent, SidebarProps};
use crate::ui::widgets::top_bar::{self, TopBarEvent, TopBarProps};

pub(crate) const INITIAL_WINDOW_WIDTH: f32 = 1280.0;
pub(crate) const INITIAL_WINDOW_HEIGHT: f32 = 720.0;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 400.0;
const CONTENT_PADDING: f32 = 16.0;
const APP_TITLE: &str = "gutter";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    Sidebar(SidebarEvent),
    TopBar(TopBarEvent),
    Window(window::Event),
    WindowSized(Size),
}

pub(crate) struct App {
    layout: Layout,
    markup: Markup,
    width: f32,
    sidebar: SidebarMarkup,
    menu: MenuMarkup,
}

impl App {
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let (config, store) = match load_environment() {
            Ok(loaded) => loaded,
            Err(err) => {
                log::error!("falling back to in-memory preferences: {err:#}");
                (LayoutConfig::default(), shared(MemoryStore::new()))
            },
        };

        // Seeded with the requested size. The window manager may open the
        // window at another size without a later `Resized`, so the real
        // size is queried once at boot.
        let app = Self::with_environment(&config, store);

        let query = window::latest()
            .and_then(window::size)
            .map(AppEvent::WindowSized);

        (app, query)
    }

    fn with_environment(config: &LayoutConfig, store: SharedStore) -> Self {
        let markup = Markup::default();
        let mut layout = Layout::new(config, INITIAL_WINDOW_WIDTH, store);
        layout.bind(&markup);

        let mut app = App {
            layout,
            markup,
            width: INITIAL_WINDOW_WIDTH,
            sidebar: SidebarMarkup::default(),
            menu: MenuMarkup::default(),
        };
        app.sync_markup();
        app
    }

    pub(crate) fn title(&self) -> String {
        format!("{APP_TITLE} - {}", self.layout.tier())
    }

    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        window::events().map(|(_id, event)| AppEvent::Window(event))
    }

    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        match event {
            AppEvent::Window(window::Event::Resized(size))
            | AppEvent::WindowSized(size) => self.resize(size),
            AppEvent::Window(_) => return Task::none(),
            AppEvent::Sidebar(SidebarEvent::ToggleClicked) => self
                .layout
                .dispatch_sidebar(gutter_layout::SidebarEvent::ToggleClicked),
            AppEvent::Sidebar(SidebarEvent::LockClicked) => self
                .layout
                .dispatch_sidebar(gutter_layout::SidebarEvent::LockClicked),
            AppEvent::Sidebar(SidebarEvent::Menu(event))
            | AppEvent::TopBar(TopBarEvent::Menu(event)) => {
                self.handle_menu(event)
            },
        }

        self.sync_markup();
        Task::none()
    }

    pub(crate) fn view(&self) -> Element<'_, AppEvent> {
        let top_bar = top_bar::view(TopBarProps {
            title: APP_TITLE,
            tier: self.layout.tier(),
            width: self.width,
            menu: self.menu_at(MenuPlacement::Topnav),
        })
        .map(AppEvent::TopBar);

        let content = container(text(self.status_line()))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(CONTENT_PADDING);

        let body: Element<'_, AppEvent> = if self.sidebar.visible {
            let sidebar = sidebar::view(SidebarProps {
                markup: &self.sidebar,
                menu: self.menu_at(MenuPlacement::Sidebar),
            })
            .map(AppEvent::Sidebar);
            row![sidebar, content].into()
        } else {
            content.into()
        };

        column![top_bar, body].into()
    }

    fn resize(&mut self, size: Size) {
        self.width = size.width;
        if let Some(change) = self.layout.resize(size.width) {
            log::debug!(
                "viewport tier changed from {} to {}",
                change.previous,
                change.tier
            );
        }
    }

    fn handle_menu(&mut self, event: SectionMenuEvent) {
        let SectionMenuEvent::ArrowPressed(index) = event;
        self.layout.dispatch_menu(MenuEvent::ArrowClicked(index));
    }

    fn menu_at(&self, placement: MenuPlacement) -> Option<&MenuMarkup> {
        (self.menu.placement == placement).then_some(&self.menu)
    }

    fn sync_markup(&mut self) {
        self.sidebar = self.markup.sidebar();
        self.menu = self.markup.menu();
    }

    fn status_line(&self) -> String {
        let Some(sidebar) = self.layout.sidebar() else {
            return String::from("no sidebar bound");
        };
        let sidebar = sidebar.borrow();
        let lock = match sidebar.lock() {
            Some(true) => "locked collapsed",
            Some(false) => "locked expanded",
            None => "unlocked",
        };
        format!(
            "sidebar {} and {lock}",
            sidebar.state().mode().class()
        )
    }
}

fn load_environment() -> anyhow::Result<(LayoutConfig, SharedStore)> {
    let (config, status) = load_config()
        .context("failed to read layout configuration")?
        .into_parts();
    match status {
        ConfigLoadStatus::Loaded => log::info!("layout configuration loaded"),
        ConfigLoadStatus::Missing => {
            log::info!("no layout configuration found, using defaults")
        },
        ConfigLoadStatus::Invalid(reason) => {
            log::warn!("layout configuration is invalid: {reason}")
        },
    }

    let path = FileStore::default_path();
    let store = FileStore::open(&path).with_context(|| {
        format!("failed to open preferences at {}", path.display())
    })?;

    Ok((config, shared(store)))
}
