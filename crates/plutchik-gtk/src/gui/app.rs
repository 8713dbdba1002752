use crate::events::AppEvent;
use crate::gui::panel::{self, PanelText};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::wheel;
use gtk::prelude::*;
use gtk4 as gtk;
use plutchik::{DyadCategory, Point, Wheel, WheelEvent, WheelState};
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use strum::IntoEnumIterator;

pub struct AppModel {
    pub wheel: Rc<RefCell<Wheel>>,
    pub state: Rc<RefCell<WheelState>>,
    pub panel: PanelText,
    pub drawing_area: gtk::DrawingArea,
    pub browse_box: gtk::Box,
    pub intensity_box: gtk::Box,
}

#[derive(Debug)]
pub enum AppMsg {
    Wheel(WheelEvent),
    /// Pointer position in drawing area coordinates.
    CursorMove(Point),
    Click(Point),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn clear_children(container: &gtk::Box) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Wheel, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Plutchik's Wheel of Emotions"),
            add_css_class: "plutchik-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Wheel(WheelEvent::Cleared));
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,
                set_spacing: 12,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_content_width: canvas_size,
                    set_content_height: canvas_size,
                    add_css_class: "plutchik-wheel",

                    add_controller = gtk::EventControllerMotion {
                        connect_motion[sender] => move |_, x, y| {
                            sender.input(AppMsg::CursorMove(Point::new(x, y)));
                        },
                        connect_leave[sender] => move |_| {
                            sender.input(AppMsg::Wheel(WheelEvent::PointerLeft));
                        }
                    },

                    add_controller = gtk::GestureClick {
                        connect_pressed[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::Click(Point::new(x, y)));
                        }
                    }
                },

                gtk::ScrolledWindow {
                    set_hexpand: true,
                    set_min_content_width: 360,
                    set_hscrollbar_policy: gtk::PolicyType::Never,

                    gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 8,
                        set_margin_top: 12,
                        set_margin_bottom: 12,
                        set_margin_start: 12,
                        set_margin_end: 12,

                        #[name = "category_box"]
                        gtk::Box {
                            set_orientation: gtk::Orientation::Horizontal,
                            add_css_class: "linked",
                        },

                        #[name = "browse_box"]
                        gtk::Box {
                            set_orientation: gtk::Orientation::Vertical,
                            set_spacing: 2,
                        },

                        gtk::Separator {},

                        gtk::Label {
                            add_css_class: "dyad-title",
                            set_xalign: 0.0,
                            #[watch]
                            set_label: &model.panel.title,
                        },

                        gtk::Label {
                            set_xalign: 0.0,
                            #[watch]
                            set_markup: &model.panel.badges,
                        },

                        gtk::Label {
                            set_xalign: 0.0,
                            #[watch]
                            set_markup: &model.panel.blend,
                        },

                        #[name = "intensity_box"]
                        gtk::Box {
                            set_orientation: gtk::Orientation::Vertical,
                            set_spacing: 4,
                        },

                        gtk::Label {
                            add_css_class: "dyad-score",
                            set_xalign: 0.0,
                            set_wrap: true,
                            #[watch]
                            set_label: &model.panel.score,
                        },

                        gtk::Label {
                            set_xalign: 0.0,
                            set_wrap: true,
                            set_selectable: true,
                            #[watch]
                            set_label: &model.panel.body,
                        },
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (wheel, rx) = init;

        theme::load_css();

        let canvas_size = wheel.geometry().canvas_size().ceil() as i32;
        let state = WheelState::default();
        let panel = panel::compose(&wheel, &state);

        let model = AppModel {
            wheel: Rc::new(RefCell::new(wheel)),
            state: Rc::new(RefCell::new(state)),
            panel,
            drawing_area: gtk::DrawingArea::default(),
            browse_box: gtk::Box::default(),
            intensity_box: gtk::Box::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();
        model.browse_box = widgets.browse_box.clone();
        model.intensity_box = widgets.intensity_box.clone();

        let wheel_draw = model.wheel.clone();
        let state_draw = model.state.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let style_context = drawing_area.style_context();
                let colors = ThemeColors::from_context(&style_context);
                let center = Point::new(width as f64 / 2.0, height as f64 / 2.0);
                let scene = wheel_draw.borrow().scene(&state_draw.borrow());
                if let Err(e) = wheel::draw(cr, center, &scene, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let mut group: Option<gtk::ToggleButton> = None;
        for category in DyadCategory::iter() {
            let button = gtk::ToggleButton::with_label(&title_case(category.as_ref()));
            button.set_group(group.as_ref());
            button.set_active(category == model.state.borrow().browsing);
            let sender = sender.clone();
            button.connect_toggled(move |button| {
                if button.is_active() {
                    sender.input(AppMsg::Wheel(WheelEvent::CategoryBrowsed(category)));
                }
            });
            widgets.category_box.append(&button);
            group.get_or_insert(button);
        }

        model.rebuild_browse_list(&sender);

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        let event = match msg {
            AppMsg::Wheel(event) => event,
            AppMsg::CursorMove(point) => WheelEvent::PointerMoved(self.wheel_point(point)),
            AppMsg::Click(point) => WheelEvent::Pressed(self.wheel_point(point)),
            AppMsg::ConfigReload => {
                self.reload();
                return;
            }
        };

        let (previous, next) = {
            let previous = self.state.borrow().clone();
            let next = self.wheel.borrow().reduce(&previous, event);
            (previous, next)
        };
        if next == previous {
            return;
        }
        *self.state.borrow_mut() = next.clone();

        if next.browsing != previous.browsing {
            self.rebuild_browse_list(&sender);
        }
        if next.selection != previous.selection {
            self.refresh_panel(&sender);
        }
        self.drawing_area.queue_draw();
    }
}

impl AppModel {
    /// Translates drawing area coordinates to an offset from the wheel center.
    fn wheel_point(&self, point: Point) -> Point {
        let center = Point::new(
            self.drawing_area.width() as f64 / 2.0,
            self.drawing_area.height() as f64 / 2.0,
        );
        point.offset_from(center)
    }

    fn rebuild_browse_list(&self, sender: &ComponentSender<Self>) {
        clear_children(&self.browse_box);

        let wheel = self.wheel.borrow();
        let state = self.state.borrow();
        for dyad in wheel.browse_list(&state) {
            let [a, b] = dyad.emotions;
            let button = gtk::Button::with_label(&format!(
                "{}  ({} + {})",
                title_case(dyad.name.as_str()),
                a,
                b
            ));
            button.add_css_class("flat");
            button.add_css_class("browse-row");
            let name = dyad.name.clone();
            let sender = sender.clone();
            button.connect_clicked(move |_| {
                sender.input(AppMsg::Wheel(WheelEvent::DyadChosen(name.clone())));
            });
            self.browse_box.append(&button);
        }
    }

    fn refresh_panel(&mut self, sender: &ComponentSender<Self>) {
        let rows = {
            let wheel = self.wheel.borrow();
            let state = self.state.borrow();
            self.panel = panel::compose(&wheel, &state);
            panel::intensity_rows(&wheel, &state)
        };

        clear_children(&self.intensity_box);
        for row in rows {
            let line = gtk::Box::new(gtk::Orientation::Horizontal, 4);
            line.append(&gtk::Label::new(Some(row.emotion.as_ref().to_uppercase().as_str())));

            let options = gtk::Box::new(gtk::Orientation::Horizontal, 0);
            options.add_css_class("linked");
            for option in row.options {
                let button = gtk::ToggleButton::with_label(&option.label);
                button.set_active(option.active);
                let (emotion, intensity) = (row.emotion, option.level);
                let sender = sender.clone();
                button.connect_clicked(move |button| {
                    // The current level stays pressed.
                    if !button.is_active() {
                        button.set_active(true);
                        return;
                    }
                    sender.input(AppMsg::Wheel(WheelEvent::IntensityChosen {
                        emotion,
                        intensity,
                    }));
                });
                options.append(&button);
            }
            line.append(&options);
            self.intensity_box.append(&line);
        }
    }

    fn reload(&mut self) {
        let wheel = match plutchik::config::load_config() {
            Ok(config) => Wheel::new(&config.wheel),
            Err(e) => {
                log::error!("Failed to reload config: {}", e);
                return;
            }
        };

        match wheel {
            Ok(wheel) => {
                let canvas_size = wheel.geometry().canvas_size().ceil() as i32;
                self.drawing_area.set_content_width(canvas_size);
                self.drawing_area.set_content_height(canvas_size);
                *self.wheel.borrow_mut() = wheel;
                self.state.borrow_mut().hover = None;
                self.drawing_area.queue_draw();
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Keeping the previous wheel, new config is invalid: {}", e),
        }
    }
}
