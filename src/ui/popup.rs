/// Popup UI for the Toggl tab timer extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::api::TogglClient;
use crate::config::Config;
use crate::host::{ChromeStorage, ChromeTab};
use crate::orchestrator::TimerOrchestrator;
use crate::storage::{KeyValueStore, save_token, save_workspace_id};
use crate::time_entry::WorkspaceId;
use crate::ui::components::{EntryMessage, SettingField};

#[derive(Clone, PartialEq)]
enum AppState {
    Idle,
    Loading(String),
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Loading("Loading...".to_string()));
    let message = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);
    let workspace_input = use_state(String::new);
    let token_input = use_state(String::new);

    // Show the running entry and the workspace id on mount
    {
        let state = state.clone();
        let message = message.clone();
        let notice = notice.clone();
        let workspace_input = workspace_input.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                let store = ChromeStorage;
                let config = Config::load(&store).await;
                let api = TogglClient::new(&config.api_base_url);
                let orchestrator = TimerOrchestrator::new(&store, &api, &ChromeTab, &config);

                let (entry, workspace) = futures::join!(
                    orchestrator.current_time_entry(),
                    orchestrator.resolve_workspace_id(),
                );

                message.set(entry.map(|entry| entry.description));
                if let Some(workspace_id) = &workspace.workspace_id {
                    workspace_input.set(workspace_id.to_string());
                }
                if workspace.cache_miss {
                    notice.set(Some("Workspace id not found in local storage".to_string()));
                }
                state.set(AppState::Idle);
            });
            || ()
        });
    }

    // Start timer handler
    let on_start = {
        let state = state.clone();
        let message = message.clone();

        Callback::from(move |_| {
            let state = state.clone();
            let message = message.clone();

            state.set(AppState::Loading("Starting timer...".to_string()));

            spawn_local(async move {
                let store = ChromeStorage;
                let config = Config::load(&store).await;
                let api = TogglClient::new(&config.api_base_url);
                let orchestrator = TimerOrchestrator::new(&store, &api, &ChromeTab, &config);

                match orchestrator.start_timer().await {
                    Ok(entry) => {
                        message.set(Some(format!("Timer started! {}", entry.description)));
                        state.set(AppState::Idle);
                    }
                    Err(e) => {
                        state.set(AppState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    let on_token_input = {
        let token_input = token_input.clone();
        Callback::from(move |value: String| token_input.set(value))
    };

    let on_save_token = {
        let token_input = token_input.clone();
        let notice = notice.clone();

        Callback::from(move |_| {
            if token_input.trim().is_empty() {
                notice.set(Some("Enter an API token first".to_string()));
                return;
            }
            save_token(&ChromeStorage, &token_input);
            token_input.set(String::new());
            notice.set(Some("Token saved".to_string()));
        })
    };

    let on_workspace_input = {
        let workspace_input = workspace_input.clone();
        Callback::from(move |value: String| workspace_input.set(value))
    };

    let on_save_workspace = {
        let workspace_input = workspace_input.clone();
        let notice = notice.clone();

        Callback::from(move |_| match WorkspaceId::parse(&workspace_input) {
            Some(workspace_id) => {
                save_workspace_id(&ChromeStorage, &workspace_id);
                notice.set(Some(format!("Workspace {} saved", workspace_id)));
            }
            None => notice.set(Some("Enter a workspace id first".to_string())),
        })
    };

    let on_reset = {
        let workspace_input = workspace_input.clone();
        let notice = notice.clone();
        let state = state.clone();

        Callback::from(move |_| {
            ChromeStorage.clear();
            workspace_input.set(String::new());
            notice.set(Some("Saved token and workspace cleared".to_string()));
            state.set(AppState::Idle);
        })
    };

    let is_busy = matches!(*state, AppState::Loading(_));

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Toggl Tab Timer"}</h1>

            if let Some(text) = (*notice).clone() {
                <Alert r#type={AlertType::Info} title={text} inline={true}>
                </Alert>
            }

            <EntryMessage message={(*message).clone()} />

            // Status display
            {match &*state {
                AppState::Loading(msg) => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{msg}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Timer not started"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Idle => html! {}
            }}

            <div class="flex-column-gap">
                <Button onclick={on_start} disabled={is_busy} variant={ButtonVariant::Primary} block={true}>
                    {"Start timer"}
                </Button>

                <SettingField
                    label="Workspace id"
                    value={(*workspace_input).clone()}
                    oninput={on_workspace_input}
                    onsave={on_save_workspace}
                    disabled={is_busy}
                />

                <SettingField
                    label="Toggl API token"
                    value={(*token_input).clone()}
                    placeholder="Paste your personal API token"
                    secret={true}
                    oninput={on_token_input}
                    onsave={on_save_token}
                    disabled={is_busy}
                />

                <Button onclick={on_reset} disabled={is_busy} variant={ButtonVariant::Link}>
                    {"Reset saved settings"}
                </Button>
            </div>

            <p class="footer-popup">
                {"Toggl Tab Timer v0.1.0"}
            </p>
        </div>
    }
}
