//! Color button widget: a swatch that opens the GTK color chooser, plus a hex label.

use argdialog_types::Rgba;
use gtk4::prelude::*;
use gtk4::{gdk, Box as GtkBox, Button, ColorDialog, DrawingArea, Label, Orientation};
use std::cell::RefCell;
use std::rc::Rc;

/// A color swatch button (40x24, checkerboard behind transparent colors)
/// followed by the color's hex code.
pub struct ColorButtonWidget {
    container: GtkBox,
    drawing_area: DrawingArea,
    hex_label: Label,
    with_alpha: bool,
    color: Rc<RefCell<Rgba>>,
    on_change: Rc<RefCell<Option<Box<dyn Fn(Rgba)>>>>,
}

impl ColorButtonWidget {
    /// Create a new ColorButtonWidget; `with_alpha` enables the alpha channel.
    pub fn new(initial_color: Rgba, with_alpha: bool) -> Self {
        let container = GtkBox::new(Orientation::Horizontal, 6);
        let color = Rc::new(RefCell::new(initial_color));
        let on_change: Rc<RefCell<Option<Box<dyn Fn(Rgba)>>>> = Rc::new(RefCell::new(None));

        let color_button = Button::new();
        color_button.set_tooltip_text(Some("Click to change color"));

        let drawing_area = DrawingArea::new();
        drawing_area.set_size_request(40, 24);

        let color_for_draw = color.clone();
        drawing_area.set_draw_func(move |_, cr, width, height| {
            draw_color_swatch(cr, width, height, &color_for_draw.borrow().to_gdk_rgba());
        });

        color_button.set_child(Some(&drawing_area));

        let hex_label = Label::new(Some(&hex_text(initial_color, with_alpha)));
        hex_label.add_css_class("monospace");
        hex_label.set_selectable(true);

        container.append(&color_button);
        container.append(&hex_label);

        let color_clone = color.clone();
        let on_change_clone = on_change.clone();
        let drawing_area_clone = drawing_area.clone();
        let hex_label_clone = hex_label.clone();
        color_button.connect_clicked(move |btn| {
            let current_color = *color_clone.borrow();
            let window = btn
                .root()
                .and_then(|root| root.downcast::<gtk4::Window>().ok());

            let color_clone2 = color_clone.clone();
            let on_change_clone2 = on_change_clone.clone();
            let drawing_area_clone2 = drawing_area_clone.clone();
            let hex_label_clone2 = hex_label_clone.clone();

            gtk4::glib::MainContext::default().spawn_local(async move {
                let dialog = ColorDialog::builder()
                    .title("Select Color")
                    .modal(true)
                    .with_alpha(with_alpha)
                    .build();
                let initial_rgba = current_color.to_gdk_rgba();

                match dialog.choose_rgba_future(window.as_ref(), Some(&initial_rgba)).await {
                    Ok(rgba) => {
                        let mut new_color = Rgba::from_gdk_rgba(&rgba);
                        if !with_alpha {
                            new_color.3 = 255;
                        }
                        *color_clone2.borrow_mut() = new_color;
                        drawing_area_clone2.queue_draw();
                        hex_label_clone2.set_text(&hex_text(new_color, with_alpha));

                        if let Some(ref callback) = *on_change_clone2.borrow() {
                            callback(new_color);
                        }
                    }
                    Err(e) => log::debug!("Color selection cancelled: {}", e),
                }
            });
        });

        Self {
            container,
            drawing_area,
            hex_label,
            with_alpha,
            color,
            on_change,
        }
    }

    /// Get the container widget (for adding to layouts).
    pub fn widget(&self) -> &GtkBox {
        &self.container
    }

    /// Get the current color.
    pub fn color(&self) -> Rgba {
        *self.color.borrow()
    }

    /// Set the color (updates the swatch display).
    pub fn set_color(&self, color: Rgba) {
        *self.color.borrow_mut() = color;
        self.drawing_area.queue_draw();
        self.hex_label.set_text(&hex_text(color, self.with_alpha));
    }

    /// Set a callback to be called when the user picks a color.
    pub fn set_on_change<F: Fn(Rgba) + 'static>(&self, callback: F) {
        *self.on_change.borrow_mut() = Some(Box::new(callback));
    }
}

fn hex_text(color: Rgba, with_alpha: bool) -> String {
    if with_alpha {
        format!("#{}", color)
    } else {
        format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
    }
}

const CHECKER: f64 = 6.0;

/// Top-left corners of the dark checkerboard squares covering `w` x `h`.
fn dark_checker_squares(w: f64, h: f64) -> impl Iterator<Item = (f64, f64)> {
    let (cols, rows) = ((w / CHECKER).ceil() as i32, (h / CHECKER).ceil() as i32);
    (0..rows).flat_map(move |row| {
        (row % 2..cols)
            .step_by(2)
            .map(move |col| (f64::from(col) * CHECKER, f64::from(row) * CHECKER))
    })
}

/// Fill the swatch with `rgba`, over a two-tone checkerboard when it is
/// translucent, and outline it.
fn draw_color_swatch(cr: &gtk4::cairo::Context, width: i32, height: i32, rgba: &gdk::RGBA) {
    let (w, h) = (f64::from(width), f64::from(height));

    if rgba.alpha() < 1.0 {
        cr.set_source_rgb(0.85, 0.85, 0.85);
        cr.paint().ok();

        // Dark squares as one path, filled once
        cr.set_source_rgb(0.55, 0.55, 0.55);
        for (x, y) in dark_checker_squares(w, h) {
            cr.rectangle(x, y, CHECKER, CHECKER);
        }
        cr.fill().ok();
    }

    cr.set_source_rgba(
        f64::from(rgba.red()),
        f64::from(rgba.green()),
        f64::from(rgba.blue()),
        f64::from(rgba.alpha()),
    );
    cr.rectangle(0.0, 0.0, w, h);
    cr.fill().ok();

    cr.set_source_rgba(0.0, 0.0, 0.0, 0.3);
    cr.set_line_width(1.0);
    cr.rectangle(0.5, 0.5, w - 1.0, h - 1.0);
    cr.stroke().ok();
}
