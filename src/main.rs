use chrono::Datelike;
use clap::Parser;
use iced::keyboard::{self, key::Named};
use iced::widget::{center, image, scrollable, text};
use iced::{event, task, touch, window, Element, Event, Subscription, Task, Theme};
use tracing::{error, info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod config;
mod media;
mod state;
mod ui;

use config::Settings;
use media::cache::ThumbnailCache;
use media::thumbnail::{load_thumbnail, ThumbnailError};
use state::catalog::{load_catalog, CatalogError};
use state::data::Catalog;
use state::lookbook::{Direction, TimerCommand};
use state::presentation::{Key, Mode, Presentation};

/// Where the window is in its life
enum Phase {
    /// Waiting for the catalog; nothing else renders
    Loading,
    /// The catalog could not be loaded; only the error is shown
    Failed(String),
    Ready(Presentation),
}

/// Main application state
struct PhotoGallery {
    settings: Settings,
    phase: Phase,
    /// Grid thumbnails, requested lazily per filtered view
    thumbnails: ThumbnailCache,
    /// The pending slideshow tick, if any
    timer: Option<task::Handle>,
    /// Vertical scroll position of the grid
    scroll_offset: f32,
    year: i32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    CatalogLoaded(Result<Catalog, CatalogError>),
    ThumbnailLoaded(usize, Result<image::Handle, ThumbnailError>),
    /// A filter chip was pressed
    TagSelected(String),
    /// A grid card was pressed, by position in the filtered view
    CardPressed(usize),
    LightboxStep(i64),
    /// Close button, Escape or a press on the backdrop
    LightboxClose,
    SlideStep(Direction),
    TogglePlay,
    /// The slideshow timer fired
    Tick(u64),
    Key(Key),
    TouchStarted(f32),
    TouchEnded(f32),
    GalleryScrolled(scrollable::Viewport),
    ScrollToTop,
    CloseRequested,
}

impl PhotoGallery {
    /// Create a new instance of the application and start loading the catalog
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let load = Task::perform(
            load_catalog(settings.root.clone(), settings.catalog_path.clone()),
            Message::CatalogLoaded,
        );

        (
            PhotoGallery {
                settings,
                phase: Phase::Loading,
                thumbnails: ThumbnailCache::default(),
                timer: None,
                scroll_offset: 0.0,
                year: chrono::Local::now().year(),
            },
            load,
        )
    }

    fn title(&self) -> String {
        match self.settings.mode {
            Mode::Gallery => "Photo Gallery".to_string(),
            Mode::Lookbook => "Lookbook".to_string(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(result) => self.catalog_loaded(result),
            Message::ThumbnailLoaded(index, result) => {
                if let Err(e) = &result {
                    warn!("⚠️  Thumbnail {index} unavailable: {e}");
                }
                self.thumbnails.finish(index, result);
                Task::none()
            }
            Message::CloseRequested => {
                let cancel = match &mut self.phase {
                    Phase::Ready(presentation) => presentation.teardown(),
                    Phase::Loading | Phase::Failed(_) => None,
                };
                info!("👋 Closing window");
                self.apply_timer(cancel).chain(iced::exit())
            }
            Message::GalleryScrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                Task::none()
            }
            Message::ScrollToTop => scrollable::scroll_to(
                ui::gallery::scroll_id(),
                scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
            ),
            message => self.dispatch(message),
        }
    }

    /// Route user input to the controller. Ignored until the catalog is loaded.
    fn dispatch(&mut self, message: Message) -> Task<Message> {
        let Phase::Ready(presentation) = &mut self.phase else {
            return Task::none();
        };

        let timer = match message {
            Message::TagSelected(tag) => {
                presentation.select_tag(&tag);
                return self.request_thumbnails();
            }
            Message::CardPressed(position) => {
                presentation.open_lightbox(position as i64);
                None
            }
            Message::LightboxStep(direction) => {
                presentation.step_lightbox(direction);
                None
            }
            Message::LightboxClose => {
                presentation.close_lightbox();
                None
            }
            Message::SlideStep(direction) => presentation.navigate_slides(direction),
            Message::TogglePlay => presentation.toggle_play(),
            Message::Tick(generation) => presentation.tick(generation),
            Message::Key(key) => presentation.key(key),
            Message::TouchStarted(x) => {
                presentation.touch_start(x);
                None
            }
            Message::TouchEnded(x) => presentation.touch_end(x),
            _ => None,
        };

        self.apply_timer(timer)
    }

    fn catalog_loaded(&mut self, result: Result<Catalog, CatalogError>) -> Task<Message> {
        match result {
            Ok(catalog) => {
                let (presentation, timer) = Presentation::new(
                    self.settings.mode,
                    catalog,
                    self.settings.reduced_motion,
                    self.settings.interval,
                );
                info!(
                    "🎨 {:?} ready: {} images, {} tags",
                    self.settings.mode,
                    presentation.catalog().len(),
                    presentation.tags().len()
                );
                self.phase = Phase::Ready(presentation);
                Task::batch([self.apply_timer(timer), self.request_thumbnails()])
            }
            Err(e) => {
                error!("❌ {e}");
                self.phase = Phase::Failed(e.user_message());
                Task::none()
            }
        }
    }

    /// Start loading thumbnails for the visible cards that have none yet
    fn request_thumbnails(&mut self) -> Task<Message> {
        let Phase::Ready(presentation) = &self.phase else {
            return Task::none();
        };
        if presentation.mode() != Mode::Gallery {
            return Task::none();
        }

        let catalog = presentation.catalog();
        let visible = presentation.view().catalog_indices();
        let size = self.settings.thumbnail_size;
        let mut tasks = Vec::new();

        for index in self.thumbnails.request(visible) {
            match catalog.get(index).and_then(|item| catalog.resolve(item)) {
                Some(path) => tasks.push(Task::perform(
                    load_thumbnail(path, size),
                    move |result| Message::ThumbnailLoaded(index, result),
                )),
                None => self.thumbnails.finish(index, Err(ThumbnailError::NoSource)),
            }
        }

        Task::batch(tasks)
    }

    /// Turn a slideshow timer command into a scheduled task.
    /// The previous task is always aborted first.
    fn apply_timer(&mut self, command: Option<TimerCommand>) -> Task<Message> {
        let Some(command) = command else {
            return Task::none();
        };

        if let Some(handle) = self.timer.take() {
            handle.abort();
        }

        match command {
            TimerCommand::Cancel => Task::none(),
            TimerCommand::Schedule { generation, after } => {
                let sleep = async move { tokio::time::sleep(after).await };
                let tick = Task::perform(sleep, move |()| Message::Tick(generation));
                let (tick, handle) = tick.abortable();
                self.timer = Some(handle);
                tick
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        match &self.phase {
            Phase::Loading => center(text("Loading images…").size(16)).into(),
            Phase::Failed(message) => ui::error_message(message),
            Phase::Ready(presentation) => match presentation.mode() {
                Mode::Gallery => {
                    let base = ui::gallery::view(
                        presentation,
                        &self.thumbnails,
                        self.scroll_offset,
                        self.year,
                    );
                    ui::lightbox::overlay(base, presentation)
                }
                Mode::Lookbook => {
                    ui::lookbook::view(presentation, &self.settings.catalog_path, self.year)
                }
            },
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, status, _window| match event {
            Event::Window(window::Event::CloseRequested) => Some(Message::CloseRequested),
            Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if status == event::Status::Captured {
                    return None;
                }
                map_key(&key, modifiers).map(Message::Key)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                Some(Message::TouchStarted(position.x))
            }
            Event::Touch(touch::Event::FingerLifted { position, .. }) => {
                Some(Message::TouchEnded(position.x))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Translate a key press into a controller key
fn map_key(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Key> {
    let keyboard::Key::Named(named) = key else {
        return None;
    };
    match named {
        Named::Escape => Some(Key::Escape),
        Named::ArrowLeft => Some(Key::ArrowLeft),
        Named::ArrowRight => Some(Key::ArrowRight),
        Named::Enter => Some(Key::Enter),
        Named::Space => Some(Key::Space),
        Named::Tab if modifiers.shift() => Some(Key::ShiftTab),
        Named::Tab => Some(Key::Tab),
        _ => None,
    }
}

fn init_tracing() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let log_level = match std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)
}

fn main() -> iced::Result {
    if let Err(e) = init_tracing() {
        eprintln!("failed to install logger: {e}");
    }

    let cli = cli::Cli::parse();
    let config = config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        warn!("⚠️  {e}, using defaults");
        config::Config::default()
    });
    let settings = Settings::resolve(&cli, config);
    info!("settings={:#?}", settings);

    iced::application(
        PhotoGallery::title,
        PhotoGallery::update,
        PhotoGallery::view,
    )
    .subscription(PhotoGallery::subscription)
    .theme(PhotoGallery::theme)
    .window(window::Settings {
        exit_on_close_request: false,
        ..window::Settings::default()
    })
    .centered()
    .run_with(move || PhotoGallery::new(settings))
}
