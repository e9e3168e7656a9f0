use yew::prelude::*;

use crate::app::utils::Modal;

#[derive(Properties, PartialEq)]
pub(in crate::app) struct InstructionsProps {
    #[prop_or_default]
    pub open: bool,
    pub on_dismiss: Callback<()>,
}

/// Launch dialog: an icon, a title, the how-to-play text, and a single
/// dismiss action.
#[function_component]
pub(in crate::app) fn InstructionsDialog(props: &InstructionsProps) -> Html {
    let on_dismiss = props.on_dismiss.clone();
    let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(()));

    html! {
        <Modal>
            <dialog id="instructions" open={props.open}>
                <article>
                    <svg class="icon" viewBox="0 0 24 24" aria-hidden="true">
                        <circle cx="12" cy="12" r="9" fill="#f4c542"/>
                        <circle cx="12" cy="12" r="9" fill="none" stroke="#1a1a1a" stroke-width="1.5"/>
                    </svg>
                    <h2>{"Find the ladybug!"}</h2>
                    <p>{"The wall in front of you is dark. Press and hold to switch on the \
                        spotlight, then sweep it across the wall. Release while the ladybug \
                        is in the light to catch it. Touch again for a new round."}</p>
                    <footer>
                        <button {onclick}>{"Play"}</button>
                    </footer>
                </article>
            </dialog>
        </Modal>
    }
}
