use yew::prelude::*;

use crate::app::game::GameView;
use crate::app::instructions::InstructionsDialog;

mod game;
mod instructions;
mod utils;

#[derive(Properties, Clone, Copy, PartialEq)]
pub(crate) struct AppProps {
    /// Placement seed override from the launch options.
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) enum Msg {
    ShowInstructions,
    DismissInstructions,
}

/// Root component: the spotlight canvas plus the instructions dialog shown
/// once at launch.
pub(crate) struct App {
    instructions_open: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = AppProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            instructions_open: true,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let open = match msg {
            Msg::ShowInstructions => true,
            Msg::DismissInstructions => false,
        };
        if self.instructions_open == open {
            false
        } else {
            self.instructions_open = open;
            true
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let seed = ctx.props().seed;
        let cb_show = ctx.link().callback(|_: MouseEvent| Msg::ShowInstructions);
        let cb_dismiss = ctx.link().callback(|()| Msg::DismissInstructions);

        html! {
            <div class="spotlight" oncontextmenu={Callback::from(|e: MouseEvent| e.prevent_default())}>
                <GameView {seed}/>
                <small class="help" onclick={cb_show}>{"?"}</small>
                <InstructionsDialog open={self.instructions_open} on_dismiss={cb_dismiss}/>
            </div>
        }
    }
}
