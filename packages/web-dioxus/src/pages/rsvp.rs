//! RSVP page component
//!
//! The single page of the invite: the guest fills in a name and head
//! counts, the submission guard decides whether the data can go out
//! immediately or needs a resubmission confirmation first, and the
//! webhook client delivers it.

use dioxus::prelude::*;

use rsvp_core::{FieldErrors, Phase, RsvpForm, RsvpSubmission, SubmissionGuard, SubmitDecision};
use webhook_client::WebhookClient;

use crate::components::{use_toast, ConfirmDialog};
use crate::config;
use crate::storage::LocalFlagStore;

/// RSVP page - confirm attendance for the party
#[component]
pub fn Rsvp() -> Element {
    let mut name = use_signal(String::new);
    let mut children_count = use_signal(|| "0".to_string());
    let mut adults_count = use_signal(|| "0".to_string());
    let mut errors = use_signal(FieldErrors::default);
    let mut guard = use_signal(|| SubmissionGuard::new(LocalFlagStore::new()));
    let toasts = use_toast();

    // Send an already-validated submission and feed the outcome back
    // into the guard. Used by both the direct path and the
    // confirmed-resubmission path.
    let deliver = use_callback(move |submission: RsvpSubmission| {
        spawn(async move {
            let client = WebhookClient::new(config::webhook_url());
            match client.send(&submission).await {
                Ok(()) => {
                    guard.write().record_success();
                    name.set(String::new());
                    children_count.set("0".to_string());
                    adults_count.set("0".to_string());
                    toasts.success(
                        "Presença confirmada! \u{1F389}",
                        "Obrigada por confirmar! Mal podemos esperar para te ver na festa!",
                    );
                }
                Err(err) => {
                    tracing::error!(%err, "failed to deliver RSVP");
                    guard.write().record_failure();
                    toasts.error(
                        "Ops! Algo deu errado \u{1F622}",
                        "Não conseguimos confirmar sua presença. Tente novamente.",
                    );
                }
            }
        });
    });

    let handle_submit = move |_| {
        if guard.read().is_sending() {
            return;
        }

        let form = RsvpForm {
            name: name(),
            children: children_count(),
            adults: adults_count(),
        };

        let staged = match guard.write().validate_and_stage(&form) {
            Ok(submission) => {
                errors.set(FieldErrors::default());
                submission
            }
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        let decision = guard.write().attempt_submit(staged);
        match decision {
            SubmitDecision::Send(submission) => deliver.call(submission),
            // The confirmation dialog is rendered from the guard phase.
            SubmitDecision::ConfirmFirst => {}
        }
    };

    let phase = guard.read().phase();
    let is_sending = phase == Phase::Sending;

    rsx! {
        div {
            class: "min-h-screen bg-pink-50",

            div {
                class: "container mx-auto px-4 py-8 md:py-16",

                // Header
                div {
                    class: "text-center mb-12 space-y-3",
                    h1 {
                        class: "text-4xl md:text-6xl font-bold text-pink-600",
                        "\u{2728} Aniversário da Emanuelly \u{2728}"
                    }
                    p {
                        class: "text-xl md:text-2xl text-pink-500 font-semibold",
                        "\u{1F497} Tema Barbie \u{1F497}"
                    }
                    p {
                        class: "text-lg text-gray-600 max-w-2xl mx-auto",
                        "Você está convidado para uma festa incrível! Por favor, confirme sua presença preenchendo o formulário abaixo."
                    }
                }

                // Form card
                div {
                    class: "max-w-2xl mx-auto",
                    div {
                        class: "bg-white rounded-lg shadow-sm border-2 border-pink-200 p-6",

                        div {
                            class: "text-center space-y-2 mb-6",
                            h2 {
                                class: "text-3xl font-bold text-pink-600",
                                "\u{1F389} Confirme sua Presença"
                            }
                            p {
                                class: "text-base text-gray-600",
                                "Queremos muito que você faça parte deste dia especial!"
                            }
                        }

                        form {
                            class: "space-y-6",
                            onsubmit: handle_submit,

                            // Full name
                            div {
                                class: "space-y-2",
                                label {
                                    r#for: "nome",
                                    class: "block text-base font-semibold text-gray-900",
                                    "Nome Completo *"
                                }
                                input {
                                    id: "nome",
                                    r#type: "text",
                                    value: "{name}",
                                    oninput: move |e| name.set(e.value()),
                                    placeholder: "Digite seu nome completo",
                                    class: "w-full h-12 px-4 text-base border-2 border-gray-300 rounded-lg focus:outline-none focus:border-pink-500"
                                }
                                if let Some(msg) = errors().name {
                                    p { class: "text-sm text-red-600", "{msg}" }
                                }
                            }

                            // Head counts
                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 gap-4",

                                div {
                                    class: "space-y-2",
                                    label {
                                        r#for: "criancas",
                                        class: "block text-base font-semibold text-gray-900",
                                        "Crianças"
                                    }
                                    input {
                                        id: "criancas",
                                        r#type: "number",
                                        min: "0",
                                        max: "50",
                                        value: "{children_count}",
                                        oninput: move |e| children_count.set(e.value()),
                                        class: "w-full h-14 px-4 text-lg font-semibold text-center border-2 border-gray-300 rounded-lg focus:outline-none focus:border-pink-500"
                                    }
                                    if let Some(msg) = errors().children {
                                        p { class: "text-sm text-red-600", "{msg}" }
                                    }
                                }

                                div {
                                    class: "space-y-2",
                                    label {
                                        r#for: "adultos",
                                        class: "block text-base font-semibold text-gray-900",
                                        "Adultos"
                                    }
                                    input {
                                        id: "adultos",
                                        r#type: "number",
                                        min: "0",
                                        max: "50",
                                        value: "{adults_count}",
                                        oninput: move |e| adults_count.set(e.value()),
                                        class: "w-full h-14 px-4 text-lg font-semibold text-center border-2 border-gray-300 rounded-lg focus:outline-none focus:border-pink-500"
                                    }
                                    if let Some(msg) = errors().adults {
                                        p { class: "text-sm text-red-600", "{msg}" }
                                    }
                                }
                            }

                            // Submit
                            button {
                                r#type: "submit",
                                disabled: is_sending,
                                class: "w-full h-14 text-lg font-bold bg-pink-600 text-white rounded-lg hover:bg-pink-700 transition-all disabled:opacity-50 disabled:cursor-not-allowed",
                                if is_sending {
                                    "Enviando..."
                                } else {
                                    "\u{1F389} Confirmar Presença"
                                }
                            }
                        }
                    }

                    // Footer
                    div {
                        class: "text-center mt-8 space-y-2",
                        p {
                            class: "text-lg text-pink-500 font-semibold",
                            "\u{1F497} Mal podemos esperar para te ver lá!"
                        }
                        p {
                            class: "text-gray-600",
                            "Qualquer dúvida, entre em contato com a família"
                        }
                    }
                }
            }

            if phase == Phase::AwaitingConfirmation {
                ConfirmDialog {
                    title: "Você já confirmou presença",
                    message: "Este navegador já enviou uma confirmação. Enviar novamente vai substituir a resposta anterior.",
                    confirm_label: "Enviar novamente",
                    cancel_label: "Cancelar",
                    on_confirm: move |_| {
                        let resend = guard.write().confirm_resubmit();
                        match resend {
                            Ok(submission) => deliver.call(submission),
                            Err(err) => {
                                tracing::warn!(%err, "resubmission aborted");
                                toasts.error(
                                    "Ops! Algo deu errado \u{1F622}",
                                    "Não encontramos os dados validados. Preencha o formulário e envie novamente.",
                                );
                            }
                        }
                    },
                    on_cancel: move |_| guard.write().cancel(),
                }
            }
        }
    }
}
