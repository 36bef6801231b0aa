use gloo_timers::future::TimeoutFuture;
use image_card_common::{CardConfig, CardError, CardOperations, FilePayload};
use log::{info, warn};
use yew::{html, Component, Context, Html};

use crate::components::image_card::{ImageCardComponent, PickedFile};

/// Configuration of the demo card. Keys that are left out take their defaults.
const DEMO_CONFIG: &str = r#"{
    "label": "Profile picture",
    "can_read": true,
    "can_write": true,
    "accepted_formats": "image/png,image/jpeg,image/gif,image/webp",
    "max_file_size": 5242880,
    "height": "320px"
}"#;

/// Hosts one card wired to a simulated upload.
pub struct App {
    config: CardConfig,
    operations: CardOperations<PickedFile>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = CardConfig::from_json(DEMO_CONFIG).unwrap_or_else(|err| {
            warn!("{}; using the default card configuration", err);
            CardConfig::default()
        });
        let limit = config.max_file_size;
        let operations = CardOperations::new()
            .with_write(move |file: PickedFile| simulated_upload(file, limit));
        Self { config, operations }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div style="max-width: 480px; margin: 2rem auto;">
                <ImageCardComponent
                    config={self.config.clone()}
                    operations={Some(self.operations.clone())}
                />
            </div>
        }
    }
}

/// Pretends to upload the file. Files over `limit` are rejected the way a server
/// would reject them; the card itself never checks the size.
async fn simulated_upload(file: PickedFile, limit: u64) -> Result<(), CardError> {
    info!("uploading {} ({} bytes)", file.name(), file.size());
    TimeoutFuture::new(800).await;
    if file.size() > limit {
        return Err(CardError::Write(format!(
            "{} exceeds the {} byte limit",
            file.name(),
            limit
        )));
    }
    Ok(())
}
