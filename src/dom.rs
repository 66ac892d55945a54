//! DOM wiring for the upload form.
//!
//! Binds the controller to the host page by element id and keeps the
//! visible controls in sync with [`FormState`] after every message.
//! The state lives in a thread-local cell; only event closures on the
//! main thread ever touch it, so no further synchronization is needed.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, DragEvent, Element, Event, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlSelectElement,
};

use crate::error::UploadError;
use crate::message::Message;
use crate::model::StepDirection;
use crate::protocol::ConsumptionReport;
use crate::render::{self, ResultLine};
use crate::state::FormState;

/// Element ids the controller binds to on the host page.
///
/// The file input, percentage field, submit button and output region
/// are required; the rest depends on the page variant.
mod ids {
    /// File picker input
    pub const FILE_INPUT: &str = "arquivoInput";
    /// Drag-and-drop target
    pub const DROP_ZONE: &str = "dropZone";
    /// File-count label
    pub const FILE_COUNT: &str = "contadorArquivos";
    /// Percentage text field
    pub const PERCENT_INPUT: &str = "porcentagemInput";
    /// Percentage increment button
    pub const PERCENT_UP: &str = "porcentagemMais";
    /// Percentage decrement button
    pub const PERCENT_DOWN: &str = "porcentagemMenos";
    /// Production line selector
    pub const LINE_SELECT: &str = "linhaSelect";
    /// Submit button
    pub const SUBMIT: &str = "calcularBtn";
    /// Loading indicator
    pub const LOADING: &str = "loading";
    /// Wrapper revealed once there is output
    pub const RESULT_CONTAINER: &str = "resultadoContainer";
    /// Output region for results and errors
    pub const OUTPUT: &str = "resultadosPorCor";
}

thread_local! {
    /// Single form state for the page.
    static STATE: RefCell<FormState<web_sys::File>> = RefCell::new(FormState::new());
}

/// Bind the controller to the host page.
///
/// Missing required elements log an error and leave the page inert;
/// optional elements are skipped when the variant does not carry them.
pub fn wire(document: &Document) {
    let Some(file_input) = get::<HtmlInputElement>(document, ids::FILE_INPUT) else {
        log::error!("missing #{} element, form not wired", ids::FILE_INPUT);
        return;
    };
    let Some(percent_input) = get::<HtmlInputElement>(document, ids::PERCENT_INPUT) else {
        log::error!("missing #{} element, form not wired", ids::PERCENT_INPUT);
        return;
    };
    let Some(submit_button) = get::<HtmlButtonElement>(document, ids::SUBMIT) else {
        log::error!("missing #{} element, form not wired", ids::SUBMIT);
        return;
    };
    if document.get_element_by_id(ids::OUTPUT).is_none() {
        log::error!("missing #{} element, form not wired", ids::OUTPUT);
        return;
    }

    // Adopt what the page already shows.
    STATE.with(|state| {
        let mut state = state.borrow_mut();
        state.percent_text = percent_input.value();
        if let Some(select) = get::<HtmlSelectElement>(document, ids::LINE_SELECT) {
            state.line = Some(select.value());
        }
    });

    wire_file_input(&file_input);
    wire_drop_zone(document);
    wire_percent_input(&percent_input);
    wire_stepper(document, ids::PERCENT_UP, StepDirection::Up);
    wire_stepper(document, ids::PERCENT_DOWN, StepDirection::Down);
    wire_line_select(document);
    wire_submit(&submit_button);

    refresh();
    log::info!("upload form wired");
}

fn host_document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

fn get<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Apply one message and bring the visible controls back in sync.
fn dispatch(message: Message<web_sys::File>) {
    STATE.with(|state| state.borrow_mut().update(message));
    refresh();
}

/// Sync the file-count label and the submit button with the state.
fn refresh() {
    let Some(document) = host_document() else { return };
    if let Some(label) = document.get_element_by_id(ids::FILE_COUNT) {
        let count = STATE.with(|state| state.borrow().files.len());
        label.set_text_content(Some(&render::file_count_label(count)));
    }
    if let Some(button) = get::<HtmlButtonElement>(&document, ids::SUBMIT) {
        let enabled = STATE.with(|state| state.borrow().submit_enabled());
        button.set_disabled(!enabled);
    }
}

fn batch_from_list(list: &web_sys::FileList) -> Vec<(String, web_sys::File)> {
    let mut batch = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(file) = list.get(index) {
            batch.push((file.name(), file));
        }
    }
    batch
}

fn wire_file_input(input: &HtmlInputElement) {
    let onchange = Closure::wrap(Box::new(move |event: Event| {
        let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(files) = input.files() {
            dispatch(Message::FilesAdded(batch_from_list(&files)));
        }
        // Reset so picking the same file again re-fires the event.
        input.set_value("");
    }) as Box<dyn FnMut(Event)>);
    input
        .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())
        .ok();
    onchange.forget();
}

fn wire_drop_zone(document: &Document) {
    let Some(zone) = document.get_element_by_id(ids::DROP_ZONE) else {
        return;
    };

    let ondragover = Closure::wrap(Box::new(move |event: DragEvent| {
        // Without this the browser navigates to the dropped file.
        event.prevent_default();
    }) as Box<dyn FnMut(DragEvent)>);
    zone.add_event_listener_with_callback("dragover", ondragover.as_ref().unchecked_ref())
        .ok();
    ondragover.forget();

    let ondrop = Closure::wrap(Box::new(move |event: DragEvent| {
        event.prevent_default();
        if let Some(files) = event.data_transfer().and_then(|transfer| transfer.files()) {
            dispatch(Message::FilesAdded(batch_from_list(&files)));
        }
    }) as Box<dyn FnMut(DragEvent)>);
    zone.add_event_listener_with_callback("drop", ondrop.as_ref().unchecked_ref())
        .ok();
    ondrop.forget();
}

fn wire_percent_input(input: &HtmlInputElement) {
    let oninput = Closure::wrap(Box::new(move |event: Event| {
        if let Some(input) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        {
            dispatch(Message::PercentTyped(input.value()));
        }
    }) as Box<dyn FnMut(Event)>);
    input
        .add_event_listener_with_callback("input", oninput.as_ref().unchecked_ref())
        .ok();
    oninput.forget();
}

fn wire_stepper(document: &Document, id: &str, direction: StepDirection) {
    let Some(button) = document.get_element_by_id(id) else {
        return;
    };
    let onclick = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        dispatch(Message::PercentStepped(direction));
        // Steppers rewrite the field text; typing never does.
        if let Some(document) = host_document() {
            if let Some(input) = get::<HtmlInputElement>(&document, ids::PERCENT_INPUT) {
                let text = STATE.with(|state| state.borrow().percent_text.clone());
                input.set_value(&text);
            }
        }
    }) as Box<dyn FnMut(Event)>);
    button
        .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        .ok();
    onclick.forget();
}

fn wire_line_select(document: &Document) {
    let Some(select) = get::<HtmlSelectElement>(document, ids::LINE_SELECT) else {
        return;
    };
    let onchange = Closure::wrap(Box::new(move |event: Event| {
        if let Some(select) = event
            .target()
            .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
        {
            dispatch(Message::LineChanged(select.value()));
        }
    }) as Box<dyn FnMut(Event)>);
    select
        .add_event_listener_with_callback("change", onchange.as_ref().unchecked_ref())
        .ok();
    onchange.forget();
}

fn wire_submit(button: &HtmlButtonElement) {
    let onclick = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        submit();
    }) as Box<dyn FnMut(Event)>);
    button
        .add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())
        .ok();
    onclick.forget();
}

/// Validate, build the payload and fire the upload future.
fn submit() {
    if STATE.with(|state| state.borrow().busy) {
        return;
    }

    let (files, porcentagem, linha) = STATE.with(|state| {
        let state = state.borrow();
        let files: Vec<(String, web_sys::File)> = state
            .files
            .iter()
            .map(|file| (file.name.clone(), file.handle.clone()))
            .collect();
        (files, state.percent_payload(), state.line.clone())
    });

    if files.is_empty() {
        render_error(&UploadError::NoFiles.to_string());
        return;
    }
    let Some(porcentagem) = porcentagem else {
        render_error(&UploadError::InvalidPercent.to_string());
        return;
    };

    log::info!("submitting {} file(s), porcentagem {porcentagem}", files.len());
    dispatch(Message::UploadStarted);
    set_loading(true);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = crate::net::upload(files, porcentagem, linha).await;
        set_loading(false);
        dispatch(Message::UploadFinished);
        match outcome {
            Ok(report) => render_report(&report),
            Err(err) => {
                log::error!("upload failed: {err}");
                render_error(&err.to_string());
            }
        }
    });
}

fn render_report(report: &ConsumptionReport) {
    with_output(|document, region| {
        for line in render::result_lines(report) {
            if let Err(err) = append_line(document, region, &line) {
                log::error!("failed to append result line: {err:?}");
            }
        }
    });
}

fn render_error(message: &str) {
    with_output(|document, region| match document.create_element("p") {
        Ok(paragraph) => {
            paragraph.set_class_name("erro");
            paragraph.set_text_content(Some(message));
            region.append_child(&paragraph).ok();
        }
        Err(err) => log::error!("failed to create error element: {err:?}"),
    });
}

/// Clear the output region, reveal its container and hand it over.
fn with_output(fill: impl FnOnce(&Document, &Element)) {
    let Some(document) = host_document() else { return };
    let Some(region) = document.get_element_by_id(ids::OUTPUT) else {
        log::error!("missing #{} element, output dropped", ids::OUTPUT);
        return;
    };
    region.set_text_content(None);
    if let Some(container) = document.get_element_by_id(ids::RESULT_CONTAINER) {
        container.class_list().remove_1("hidden").ok();
    }
    fill(&document, &region);
}

fn append_line(document: &Document, region: &Element, line: &ResultLine) -> Result<(), JsValue> {
    let paragraph: HtmlElement = document.create_element("p")?.dyn_into()?;
    paragraph.set_text_content(Some(&line.text));
    paragraph.style().set_property("color", line.color_hex)?;
    if line.bold {
        paragraph.style().set_property("font-weight", "bold")?;
    }
    region.append_child(&paragraph)?;
    Ok(())
}

fn set_loading(visible: bool) {
    let Some(document) = host_document() else { return };
    if let Some(indicator) = document.get_element_by_id(ids::LOADING) {
        let classes = indicator.class_list();
        let outcome = if visible {
            classes.remove_1("hidden")
        } else {
            classes.add_1("hidden")
        };
        outcome.ok();
    }
}
