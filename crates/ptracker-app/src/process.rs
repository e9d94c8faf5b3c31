//! Message processing
//!
//! Runs a message through the TEA update function, follows the chain of
//! follow-up messages, and dispatches each resulting action.

use tokio::sync::mpsc;

use ptracker_api::PromiseApi;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<A>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    api: &A,
) where
    A: PromiseApi + Clone + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), api);
        }

        msg = result.message;
    }
}
