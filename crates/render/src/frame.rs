use crate::camera::Camera;
use crate::uniforms::CameraUniforms;
use sceneview_assets::{Drawable, ModelRegistry, TextureCache};
use sceneview_input::Action;

/// Everything one frame needs, borrowed explicitly from its owners.
///
/// The camera is borrowed mutably for input; both registries only shared,
/// so models and textures cannot be added or removed while a frame is in
/// flight.
pub struct RenderContext<'a, M, T> {
    pub camera: &'a mut Camera,
    pub models: &'a ModelRegistry<M>,
    pub textures: &'a TextureCache<T>,
}

/// What a frame did.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    pub uniforms: CameraUniforms,
    pub draw_calls: usize,
    pub actions_applied: usize,
    /// Textures resident in the cache during the frame.
    pub textures_resident: usize,
}

impl<'a, M, T> RenderContext<'a, M, T> {
    pub fn new(
        camera: &'a mut Camera,
        models: &'a ModelRegistry<M>,
        textures: &'a TextureCache<T>,
    ) -> Self {
        Self {
            camera,
            models,
            textures,
        }
    }

    /// Run one frame: apply `actions` in order, build the camera uniforms,
    /// then draw every registered model with `shader`.
    pub fn tick<S: ?Sized>(&mut self, actions: &[Action], dt: f32, shader: &S) -> FrameStats
    where
        M: Drawable<S>,
    {
        let mut actions_applied = 0;
        for action in actions {
            if matches!(action, Action::Noop) {
                continue;
            }
            self.camera.apply(*action, dt);
            actions_applied += 1;
        }

        let uniforms = CameraUniforms::from_camera(self.camera);
        let draw_calls = self.models.draw_all(shader);
        let textures_resident = self.textures.len();

        tracing::trace!(
            actions = actions_applied,
            draw_calls,
            textures = textures_resident,
            dt,
            "frame complete"
        );

        FrameStats {
            uniforms,
            draw_calls,
            actions_applied,
            textures_resident,
        }
    }
}
