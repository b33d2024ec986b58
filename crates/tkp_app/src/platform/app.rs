use std::sync::Arc;

use chrono::Utc;
use iced::widget::text_editor;
use iced::{Element, Task, Theme};
use tkp_core::{update, Msg, PanelState, PanelViewModel};
use tkp_engine::{DirectorySink, DownloadSink, Engine, HttpGenerator};
use tkp_logging::{tkp_info, tkp_warn};

use super::config::{self, AppConfig, ConfigSource};
use super::dialog::DialogSink;
use super::{effects, logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let work_dir = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let (config, source) = config::load_or_create(&work_dir)?;

    logging::initialize(config.log_destination);
    match &source {
        ConfigSource::Loaded(path) => tkp_info!("Loaded config from {:?}", path),
        ConfigSource::CreatedDefault(path) => {
            tkp_warn!(
                "No config found; wrote defaults to {:?}. Point `generator.endpoint` at your generation service.",
                path
            )
        }
    }

    let engine = build_engine(&config)?;
    let panel = PanelApp::new(engine, &config.initial_query);

    iced::application(ui::constants::WINDOW_TITLE, PanelApp::update, PanelApp::view)
        .window_size(ui::constants::WINDOW_SIZE)
        .theme(|_| Theme::Light)
        .run_with(move || (panel, Task::none()))?;
    Ok(())
}

fn build_engine(config: &AppConfig) -> anyhow::Result<Engine> {
    let settings = config.generator.settings();
    tkp_info!(
        "Generator endpoint {} (request timeout {:?})",
        settings.endpoint,
        settings.request_timeout
    );
    let generator = HttpGenerator::new(settings)?;

    let sink: Arc<dyn DownloadSink> = if config.downloads.ask_where_to_save {
        Arc::new(DialogSink)
    } else {
        tkp_info!("Saving documents into {:?}", config.downloads.directory);
        Arc::new(DirectorySink::new(config.downloads.directory.clone()))
    };

    let clock = Arc::new(|| u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default());
    Ok(Engine::new(Arc::new(generator), sink, clock))
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Raw text editor action; edits are forwarded to the panel as `QueryChanged`.
    Editor(text_editor::Action),
    Panel(Msg),
}

struct PanelApp {
    state: PanelState,
    view: PanelViewModel,
    editor: text_editor::Content,
    engine: Engine,
}

impl PanelApp {
    fn new(engine: Engine, initial_query: &str) -> Self {
        let state = PanelState::with_query(initial_query);
        Self {
            view: state.view(),
            state,
            editor: text_editor::Content::with_text(initial_query),
            engine,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Editor(action) => {
                let is_edit = action.is_edit();
                self.editor.perform(action);
                if is_edit {
                    self.dispatch(Msg::QueryChanged(self.editor.text()))
                } else {
                    Task::none()
                }
            }
            Message::Panel(msg) => self.dispatch(msg),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        ui::render::render(&self.view, &self.editor)
    }

    fn dispatch(&mut self, msg: Msg) -> Task<Message> {
        if let Msg::DownloadSaved { attempt, path } = &msg {
            tkp_info!("Attempt {} saved to {:?}", attempt, path);
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, pending) = update(state, msg);
        if state.consume_dirty() {
            self.view = state.view();
        }
        self.state = state;

        Task::batch(
            pending
                .into_iter()
                .map(|effect| effects::run(&self.engine, effect).map(Message::Panel)),
        )
    }
}
