//=========================================================================
// Title Presenter
//=========================================================================
//
// Minimal renderer: writes the latest snapshot into the window title.
//
// Sprite drawing lives outside this crate; this presenter exists so a
// run of the binary shows where the player is and which screen is up.
//
//=========================================================================

use winit::window::Window;

use crate::core::scene::{GameState, SceneKind};
use crate::core::snapshot::RenderSnapshot;

pub(crate) struct TitlePresenter {
    base: String,
    last: Option<String>,
}

impl TitlePresenter {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self { base: base.into(), last: None }
    }

    /// Updates the window title if the summary changed.
    pub(crate) fn present(&mut self, window: &Window, snapshot: &RenderSnapshot) {
        let title = self.describe(snapshot);
        if self.last.as_deref() != Some(title.as_str()) {
            window.set_title(&title);
            self.last = Some(title);
        }
    }

    pub(crate) fn describe(&self, snapshot: &RenderSnapshot) -> String {
        if snapshot.transitioning {
            return format!("{} | Loading...", self.base);
        }

        match (snapshot.state, snapshot.scene) {
            (GameState::Victory, _) => {
                format!("{} | Quest complete! Press Enter to play again", self.base)
            }
            (_, Some(scene)) => {
                let mut title = format!(
                    "{} | {:?} | ({:.0}, {:.0}) {:?}",
                    self.base, scene.kind, scene.position.x, scene.position.y, scene.direction
                );
                if scene.moving {
                    title.push_str(&format!(" walking[{}]", scene.walk_frame));
                }
                if scene.kind == SceneKind::Outdoor {
                    title.push_str(&format!(" | camera {:.0}", scene.camera_offset));
                }
                if let Some(metres) = scene.companion_distance() {
                    title.push_str(&format!(" | Distance: {}m", metres));
                }
                if scene.triggered {
                    title.push_str(match scene.kind {
                        SceneKind::Room => " | Door!",
                        SceneKind::Outdoor => " | Found you!",
                    });
                }
                title
            }
            (state, None) => format!("{} | {:?}", self.base, state),
        }
    }
}
