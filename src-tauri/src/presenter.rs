/**
 * Tauri Presenter
 *
 * Shows each planned HudBox window as an undecorated Tauri webview window
 * pointed at the configured address. Page styling and the drag hook are
 * installed through the plan's initialisation script.
 */
use hudbox::{Presenter, WindowPlan};
use tauri::window::Color;
use tauri::{AppHandle, Runtime, Url, WebviewUrl, WebviewWindowBuilder};

#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("'{address}' is not a valid URL: {source}")]
    InvalidAddress {
        address: String,
        source: url::ParseError,
    },

    #[error(transparent)]
    Tauri(#[from] tauri::Error),
}

pub struct TauriPresenter<R: Runtime> {
    app: AppHandle<R>,
}

impl<R: Runtime> TauriPresenter<R> {
    pub fn new(app: AppHandle<R>) -> Self {
        Self { app }
    }
}

impl<R: Runtime> Presenter for TauriPresenter<R> {
    type Error = PresentError;

    fn present_window(&mut self, plan: WindowPlan) -> Result<(), Self::Error> {
        let config = plan.config();
        let url = Url::parse(config.address()).map_err(|source| PresentError::InvalidAddress {
            address: config.address().to_owned(),
            source,
        })?;

        let mut builder = WebviewWindowBuilder::new(&self.app, plan.label(), WebviewUrl::External(url))
            .title(config.title())
            .inner_size(f64::from(config.width()), f64::from(config.height()))
            .decorations(plan.decorations())
            .resizable(plan.resizable())
            .transparent(config.is_transparent());

        if config.is_transparent() {
            builder = builder.background_color(Color(0, 0, 0, 0));
        }
        if let Some(script) = plan.init_script() {
            builder = builder.initialization_script(script);
        }

        builder.build()?;
        log::debug!(
            "Opened {} ({}x{}, opacity {}, locked {}, transparent {})",
            plan.label(),
            config.width(),
            config.height(),
            config.opacity(),
            config.is_locked(),
            config.is_transparent()
        );
        Ok(())
    }
}
