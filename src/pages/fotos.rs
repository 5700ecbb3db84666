//! Photo upload for one student.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shows the current photo, previews the picked file immediately with an
//! object URL, and uploads it as multipart `aluno_id` + `foto`.

#[cfg(test)]
#[path = "fotos_test.rs"]
mod fotos_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::app::{use_notifier, use_services};
use crate::components::loading::Loading;
use crate::net::api::ApiError;
use crate::pages::aluno::parse_id;
use crate::pages::alunos::edit_path;
use crate::routes::HOME_PATH;
use crate::state::toast::Notifier;

pub const PHOTO_LOAD_FAILED_MESSAGE: &str = "Erro ao obter imagem";
pub const PHOTO_UPDATED_MESSAGE: &str = "Foto atualizada com sucesso";
pub const PHOTO_UPLOAD_FAILED_MESSAGE: &str = "Erro ao atualizar a foto";

const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Browsers report an empty type for unknown files.
pub fn content_type_or_default(raw: &str) -> String {
    if raw.trim().is_empty() { DEFAULT_CONTENT_TYPE.to_owned() } else { raw.to_owned() }
}

/// Whether a failed photo load should be toasted and leave the page. An
/// expired session is left to the auth task so the return path survives.
pub fn reports_load_failure(err: &ApiError) -> bool {
    !matches!(err, ApiError::SessionExpired)
}

/// Whether a failed upload should be toasted; expiry is reported elsewhere.
pub fn reports_upload_failure(err: &ApiError) -> bool {
    !matches!(err, ApiError::SessionExpired)
}

#[component]
pub fn FotosPage() -> impl IntoView {
    let services = use_services();
    let notifier = use_notifier();
    let navigate = use_navigate();
    let params = use_params_map();

    let foto = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let Some(id) = parse_id(params.get_untracked().get("id").as_deref()) else {
        notifier.error(PHOTO_LOAD_FAILED_MESSAGE);
        navigate(HOME_PATH, NavigateOptions::default());
        return ().into_any();
    };

    is_loading.set(true);
    let api = services.get_value().api.clone();
    leptos::task::spawn_local(async move {
        match api.get_aluno(id).await {
            Ok(aluno) => foto.set(aluno.photo_url().map(str::to_owned)),
            Err(e) if !reports_load_failure(&e) => {}
            Err(e) => {
                log::warn!("photo load failed: {e}");
                notifier.error(PHOTO_LOAD_FAILED_MESSAGE);
                navigate(HOME_PATH, NavigateOptions::default());
            }
        }
        is_loading.set(false);
    });

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(file) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
            else {
                return;
            };
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                foto.set(Some(url));
            }

            is_loading.set(true);
            let api = services.get_value().api.clone();
            leptos::task::spawn_local(async move {
                let photo = match read_photo(&file).await {
                    Ok(photo) => photo,
                    Err(e) => {
                        log::warn!("could not read {}: {e:?}", file.name());
                        notifier.error(PHOTO_UPLOAD_FAILED_MESSAGE);
                        is_loading.set(false);
                        return;
                    }
                };
                match api.upload_foto(id, photo).await {
                    Ok(()) => notifier.success(PHOTO_UPDATED_MESSAGE),
                    Err(e) if reports_upload_failure(&e) => notifier.error(PHOTO_UPLOAD_FAILED_MESSAGE),
                    Err(_) => {}
                }
                is_loading.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, services, notifier);
        }
    };

    view! {
        <section class="page page--fotos">
            <Loading is_loading/>
            <h1>"Clique abaixo e selecione a nova foto"</h1>
            <form class="form">
                <label class="fotos__picker">
                    {move || match foto.get() {
                        Some(url) => view! { <img src=url alt="Foto"/> }.into_any(),
                        None => "Selecionar".into_any(),
                    }}
                    <input type="file" accept="image/*" on:change=on_change/>
                </label>
                <A href=edit_path(id)>"Voltar"</A>
            </form>
        </section>
    }
    .into_any()
}

#[cfg(feature = "csr")]
async fn read_photo(file: &web_sys::File) -> Result<crate::net::types::PhotoFile, wasm_bindgen::JsValue> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await?;
    Ok(crate::net::types::PhotoFile {
        file_name: file.name(),
        content_type: content_type_or_default(&file.type_()),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
