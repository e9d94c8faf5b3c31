//! Key event handlers for each screen and the promise popup

use crate::detail::{DetailFocus, PromiseDetail};
use crate::input_key::InputKey;
use crate::message::Message;
use crate::route::Route;
use crate::state::AppState;

/// Convert key events to messages based on what is on screen
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit with Ctrl+C from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    // Alerts block everything underneath until dismissed
    if state.active_notice().is_some() {
        return Some(Message::DismissNotice);
    }

    if let Some(detail) = &state.detail {
        return handle_key_detail(detail, key);
    }

    if let Some(msg) = handle_key_global(state, key) {
        return Some(msg);
    }

    match state.route {
        Route::Home { .. } => handle_key_home(state, key),
        Route::Politicians => handle_key_politicians(state, key),
        Route::PromiseCard { .. } => handle_key_card(key),
        Route::Login => handle_key_login(state, key),
        Route::About | Route::Contact => None,
    }
}

/// Keys shared by every screen while no popup is open
fn handle_key_global(state: &AppState, key: InputKey) -> Option<Message> {
    if let Some(route) = key.nav_digit().and_then(Route::from_nav_number) {
        return Some(Message::Navigate(route));
    }
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        // Reload the current screen
        InputKey::Char('r') => Some(Message::Navigate(state.route)),
        _ => None,
    }
}

fn handle_key_home(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevRow),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextRow),
        InputKey::Left | InputKey::Char('h') | InputKey::PageUp => Some(Message::PrevPage),
        InputKey::Right | InputKey::Char('l') | InputKey::PageDown => Some(Message::NextPage),
        InputKey::Home | InputKey::Char('g') => Some(Message::FirstPage),
        InputKey::End | InputKey::Char('G') => Some(Message::LastPage),

        InputKey::Enter => state.home.selected_promise().map(|p| Message::OpenPromise {
            promise_id: p.id,
            edit: false,
        }),
        InputKey::Char('e') if state.journalist => {
            state.home.selected_promise().map(|p| Message::OpenPromise {
                promise_id: p.id,
                edit: true,
            })
        }

        // Scorecard for the candidate on screen
        InputKey::Char('c') => state
            .home
            .candidate_id()
            .map(|candidate_id| Message::Navigate(Route::PromiseCard { candidate_id })),
        _ => None,
    }
}

fn handle_key_politicians(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevPolitician),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNextPolitician),
        InputKey::Enter => state.politicians.selected_candidate().map(|c| {
            Message::Navigate(Route::Home {
                candidate_id: Some(c.id),
            })
        }),
        InputKey::Char('c') => state
            .politicians
            .selected_candidate()
            .map(|c| Message::Navigate(Route::PromiseCard { candidate_id: c.id })),
        _ => None,
    }
}

fn handle_key_card(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::CardSelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::CardSelectNext),
        InputKey::Left | InputKey::Char('h') => Some(Message::CardCarouselPrev),
        InputKey::Right | InputKey::Char('l') => Some(Message::CardCarouselNext),
        _ => None,
    }
}

fn handle_key_login(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Right | InputKey::Tab | InputKey::BackTab => {
            Some(Message::ToggleLoginChoice)
        }
        InputKey::Enter if state.journalist => Some(Message::Logout),
        InputKey::Enter => Some(Message::Login),
        _ => None,
    }
}

fn handle_key_detail(detail: &PromiseDetail, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => return Some(Message::ClosePromise),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrev),
        _ => {}
    }

    if detail.is_editing() && detail.focus.is_text_field() {
        return match key {
            InputKey::Char(c) => Some(Message::FormInput(c)),
            InputKey::Backspace => Some(Message::FormBackspace),
            InputKey::Enter => Some(Message::SubmitForm),
            _ => None,
        };
    }

    match (detail.focus, key) {
        (DetailFocus::Status, InputKey::Left | InputKey::Up | InputKey::Char('h' | 'k')) => {
            Some(Message::CycleStatus { forward: false })
        }
        (DetailFocus::Status, InputKey::Right | InputKey::Down | InputKey::Char('l' | 'j')) => {
            Some(Message::CycleStatus { forward: true })
        }
        (DetailFocus::Status, InputKey::Enter | InputKey::Char(' ')) => Some(Message::ConfirmStatus),
        (_, InputKey::Up | InputKey::Char('k')) => Some(Message::SelectPrevAction),
        (_, InputKey::Down | InputKey::Char('j')) => Some(Message::SelectNextAction),
        (_, InputKey::Left | InputKey::Char('h')) => Some(Message::CarouselPrev),
        (_, InputKey::Right | InputKey::Char('l')) => Some(Message::CarouselNext),
        (_, InputKey::Enter | InputKey::Char(' ')) => detail
            .selected_action_id()
            .map(Message::ToggleActionCitations),
        (_, InputKey::Char('q')) => Some(Message::ClosePromise),
        _ => None,
    }
}
