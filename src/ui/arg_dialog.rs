//! Settings dialog: an [`ArgListWidget`] with OK/Cancel buttons

use argdialog_types::{Section, ValueMap};
use gtk4::prelude::*;
use gtk4::{Orientation, Window};
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use super::arg_list_widget::ArgListWidget;
use super::widget_builder::{create_dialog_buttons, create_padded_box, DEFAULT_SPACING};

type ResponseCallback = Rc<RefCell<Option<Box<dyn Fn(Option<ValueMap>)>>>>;

#[derive(Debug, Clone)]
enum DialogResult {
    Pending,
    Accepted(ValueMap),
    Cancelled,
}

/// Modal window presenting every section of an argument set.
///
/// OK reports the collected values, Cancel and closing the window report `None`.
pub struct ArgDialog {
    window: Window,
    list: Rc<ArgListWidget>,
    result: Rc<RefCell<DialogResult>>,
    waker: Rc<RefCell<Option<Waker>>>,
    on_response: ResponseCallback,
}

impl ArgDialog {
    pub fn new(
        parent: Option<&Window>,
        title: &str,
        sections: &[Section],
        orphan_name: &str,
    ) -> Self {
        let window = Window::builder()
            .title(title)
            .modal(true)
            .default_width(800)
            .default_height(400)
            .resizable(true)
            .build();

        if let Some(parent) = parent {
            window.set_transient_for(Some(parent));
        }

        let main_box = create_padded_box(Orientation::Vertical, DEFAULT_SPACING);

        let list = Rc::new(ArgListWidget::new(sections, orphan_name));
        list.widget().set_vexpand(true);
        main_box.append(list.widget());

        let (button_box, cancel_button, ok_button) = create_dialog_buttons();
        main_box.append(&button_box);
        window.set_child(Some(&main_box));
        window.set_default_widget(Some(&ok_button));

        let result = Rc::new(RefCell::new(DialogResult::Pending));
        let waker: Rc<RefCell<Option<Waker>>> = Rc::new(RefCell::new(None));
        let on_response: ResponseCallback = Rc::new(RefCell::new(None));

        // Handle OK button
        let list_for_ok = list.clone();
        let result_for_ok = result.clone();
        let window_for_ok = window.clone();
        ok_button.connect_clicked(move |_| {
            *result_for_ok.borrow_mut() = DialogResult::Accepted(list_for_ok.values());
            window_for_ok.close();
        });

        // Handle Cancel button
        let result_for_cancel = result.clone();
        let window_for_cancel = window.clone();
        cancel_button.connect_clicked(move |_| {
            *result_for_cancel.borrow_mut() = DialogResult::Cancelled;
            window_for_cancel.close();
        });

        // Every way of closing ends up here
        let result_for_close = result.clone();
        let waker_for_close = waker.clone();
        let on_response_for_close = on_response.clone();
        window.connect_close_request(move |_| {
            if matches!(*result_for_close.borrow(), DialogResult::Pending) {
                *result_for_close.borrow_mut() = DialogResult::Cancelled;
            }
            let response = match &*result_for_close.borrow() {
                DialogResult::Accepted(values) => Some(values.clone()),
                _ => None,
            };
            log::info!(
                "Argument dialog {}",
                if response.is_some() { "accepted" } else { "cancelled" }
            );
            if let Some(callback) = on_response_for_close.borrow().as_ref() {
                callback(response);
            }
            if let Some(waker) = waker_for_close.borrow_mut().take() {
                waker.wake();
            }
            gtk4::glib::Propagation::Proceed
        });

        Self {
            window,
            list,
            result,
            waker,
            on_response,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn values(&self) -> ValueMap {
        self.list.values()
    }

    pub fn set_values(&self, values: &ValueMap) {
        self.list.set_values(values)
    }

    /// Set the callback invoked whenever any value is adjusted.
    pub fn set_on_value_adjusted<F: Fn() + 'static>(&self, callback: F) {
        self.list.set_on_change(callback);
    }

    /// Set the callback invoked once the dialog closes.
    pub fn connect_response<F: Fn(Option<ValueMap>) + 'static>(&self, callback: F) {
        *self.on_response.borrow_mut() = Some(Box::new(callback));
    }

    pub fn present(&self) {
        self.window.present();
    }

    /// Show the dialog and wait until it is closed.
    pub async fn run(&self) -> Option<ValueMap> {
        struct DialogFuture {
            result: Rc<RefCell<DialogResult>>,
            waker: Rc<RefCell<Option<Waker>>>,
        }

        impl Future for DialogFuture {
            type Output = Option<ValueMap>;

            fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
                let result = self.result.borrow().clone();
                match result {
                    DialogResult::Accepted(values) => Poll::Ready(Some(values)),
                    DialogResult::Cancelled => Poll::Ready(None),
                    DialogResult::Pending => {
                        *self.waker.borrow_mut() = Some(cx.waker().clone());
                        Poll::Pending
                    }
                }
            }
        }

        self.present();

        DialogFuture {
            result: self.result.clone(),
            waker: self.waker.clone(),
        }
        .await
    }
}
