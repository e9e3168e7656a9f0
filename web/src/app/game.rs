use bitflags::bitflags;
use gloo::events::EventListener;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, PointerEvent};
use yew::prelude::*;

use spotlight_core::{
    GameSurface, PointF, RandomPlacement, Raster, SizeU, SpotlightScene, Touch, TouchPhase,
};

use crate::app::utils::js_random_seed;
use crate::assets;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
    struct PointerButtons: u16 {
        const PRIMARY   = 1;
        const SECONDARY = 1 << 1;
        const AUXILIARY = 1 << 2;
        const BACK      = 1 << 3;
        const FORWARD   = 1 << 4;
    }
}

#[derive(Properties, Clone, Copy, PartialEq)]
pub(in crate::app) struct GameProps {
    #[prop_or_default]
    pub seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(in crate::app) enum Msg {
    Touch(TouchPhase, PointF),
    Resized,
}

/// Canvas host for the core scene: feeds pointer samples in, presents
/// composed frames out.
pub(in crate::app) struct GameView {
    scene: SpotlightScene<RandomPlacement>,
    frame: Raster,
    canvas: NodeRef,
    _resize_listener: EventListener,
}

impl GameView {
    fn window_size() -> SizeU {
        let window = gloo::utils::window();
        let side = |v: Result<JsValue, JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
        };
        SizeU::new(side(window.inner_width()), side(window.inner_height()))
    }

    fn pos_of(event: &PointerEvent) -> PointF {
        PointF::new(event.offset_x() as f32, event.offset_y() as f32)
    }

    fn present(&mut self) {
        let size = self.frame.size();
        if size.is_empty() {
            return;
        }
        self.scene.draw(&mut self.frame);

        let Some(canvas) = self.canvas.cast::<HtmlCanvasElement>() else {
            return;
        };
        let Some(context) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::error!("could not acquire a 2d canvas context");
            return;
        };

        let bytes = self.frame.to_rgba_bytes();
        match ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(bytes.as_slice()),
            size.width,
            size.height,
        ) {
            Ok(data) => {
                if let Err(err) = context.put_image_data(&data, 0.0, 0.0) {
                    log::error!("failed to present frame: {:?}", err);
                }
            }
            Err(err) => log::error!("failed to build frame image data: {:?}", err),
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let seed = ctx.props().seed.unwrap_or_else(js_random_seed);
        log::debug!("placement seed: {}", seed);

        let scene = SpotlightScene::new(
            assets::hidden_image(),
            &assets::spotlight_mask(),
            RandomPlacement::from_seed(seed),
        )
        .expect("bundled assets must produce a valid scene");

        let link = ctx.link().clone();
        let resize = EventListener::new(&gloo::utils::window(), "resize", move |_| {
            link.send_message(Msg::Resized)
        });

        let size = Self::window_size();
        let mut view = Self {
            scene,
            frame: Raster::new(size),
            canvas: NodeRef::default(),
            _resize_listener: resize,
        };
        view.scene.resized(size);
        view
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Resized => {
                let size = Self::window_size();
                if size == self.scene.game().view_size() {
                    return false;
                }
                log::debug!("view resized to {}x{}", size.width, size.height);
                self.frame = Raster::new(size);
                self.scene.resized(size);
                true
            }
            // Ignore stray releases that never went down on the canvas.
            Msg::Touch(TouchPhase::Up, _) if !self.scene.game().state().spotlight_visible() => {
                false
            }
            Msg::Touch(phase, pos) => self.scene.touch(Touch::new(phase, pos)).has_update(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let size = self.frame.size();

        let onpointerdown = ctx.link().batch_callback(|e: PointerEvent| {
            let buttons = PointerButtons::from_bits_truncate(e.buttons());
            if !buttons.contains(PointerButtons::PRIMARY) {
                return None;
            }
            // Keep receiving samples when the drag leaves the canvas.
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
                if let Err(err) = target.set_pointer_capture(e.pointer_id()) {
                    log::warn!("pointer capture rejected: {:?}", err);
                }
            }
            Some(Msg::Touch(TouchPhase::Down, Self::pos_of(&e)))
        });

        let onpointermove = ctx.link().batch_callback(|e: PointerEvent| {
            PointerButtons::from_bits_truncate(e.buttons())
                .contains(PointerButtons::PRIMARY)
                .then(|| Msg::Touch(TouchPhase::Move, Self::pos_of(&e)))
        });

        let onpointerup = ctx
            .link()
            .callback(|e: PointerEvent| Msg::Touch(TouchPhase::Up, Self::pos_of(&e)));

        html! {
            <canvas
                ref={self.canvas.clone()}
                width={size.width.to_string()}
                height={size.height.to_string()}
                {onpointerdown}
                {onpointermove}
                {onpointerup}
            />
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.present();
    }
}
