use crate::dom::{create_element, set_shown, set_style};
use crate::ui;
use fnv::FnvHashMap;
use heart_core::{region, regions, FrameOutput, Hover, Region, RegionId};
use web_sys as web;

/// DOM layer drawn over the canvas: labels, tooltip, detail panel, region
/// list, badges and the loading screen.
pub struct Overlay {
    root: web::HtmlElement,
    labels: FnvHashMap<RegionId, web::HtmlElement>,
    region_buttons: FnvHashMap<RegionId, web::HtmlElement>,
    tooltip: web::HtmlElement,
    tooltip_dot: web::HtmlElement,
    tooltip_name: web::HtmlElement,
    detail: web::HtmlElement,
    detail_body: web::HtmlElement,
    detail_close: web::HtmlElement,
    region_list: web::HtmlElement,
    hint: web::HtmlElement,
    xray_button: web::HtmlElement,
    pick_badge: web::HtmlElement,
    loading: web::HtmlElement,
    loading_bar: web::HtmlElement,
    loading_text: web::HtmlElement,
    document: web::Document,
    loaded: bool,
    detail_for: Option<RegionId>,
}

impl Overlay {
    pub fn new(document: &web::Document, parent: &web::Element, fact: &str) -> anyhow::Result<Self> {
        let root = create_element(document, "div", "heart-overlay")?;
        set_style(&root, "position", "absolute");
        set_style(&root, "inset", "0");
        set_style(&root, "pointer-events", "none");
        set_style(&root, "overflow", "hidden");

        let mut labels = FnvHashMap::default();
        for r in regions() {
            let label = build_label(document, r)?;
            append(&root, &label)?;
            labels.insert(r.id, label);
        }

        let tooltip = create_element(document, "div", "heart-tooltip")?;
        set_style(&tooltip, "position", "absolute");
        set_style(&tooltip, "background", "rgba(255,255,255,0.95)");
        set_style(&tooltip, "border-radius", "12px");
        set_style(&tooltip, "padding", "8px 12px");
        let tooltip_dot = create_element(document, "span", "dot")?;
        let tooltip_name = create_element(document, "span", "name")?;
        let tooltip_cta = create_element(document, "div", "cta")?;
        tooltip_cta.set_text_content(Some(ui::TOOLTIP_CTA));
        append(&tooltip, &tooltip_dot)?;
        append(&tooltip, &tooltip_name)?;
        append(&tooltip, &tooltip_cta)?;
        set_shown(&tooltip, false);
        append(&root, &tooltip)?;

        let detail = create_element(document, "div", "heart-detail")?;
        set_style(&detail, "position", "absolute");
        set_style(&detail, "width", "18rem");
        set_style(&detail, "transform", "translate(-50%, 40px)");
        set_style(&detail, "pointer-events", "auto");
        let detail_close = create_element(document, "button", "close")?;
        detail_close.set_text_content(Some("×"));
        let detail_body = create_element(document, "div", "body")?;
        append(&detail, &detail_close)?;
        append(&detail, &detail_body)?;
        set_shown(&detail, false);
        append(&root, &detail)?;

        let region_list = create_element(document, "div", "heart-regions")?;
        set_style(&region_list, "position", "absolute");
        set_style(&region_list, "left", "1rem");
        set_style(&region_list, "bottom", "1rem");
        set_style(&region_list, "pointer-events", "auto");
        let heading = create_element(document, "div", "heading")?;
        heading.set_text_content(Some("REGIONS"));
        append(&region_list, &heading)?;
        let mut region_buttons = FnvHashMap::default();
        for r in regions() {
            let button = create_element(document, "button", "region")?;
            button.set_attribute("data-region", r.id.as_str()).ok();
            let dot = create_element(document, "span", "dot")?;
            set_style(&dot, "background", &r.color.to_hex());
            let name = create_element(document, "span", "name")?;
            name.set_text_content(Some(r.name));
            append(&button, &dot)?;
            append(&button, &name)?;
            append(&region_list, &button)?;
            region_buttons.insert(r.id, button);
        }
        set_shown(&region_list, false);
        append(&root, &region_list)?;

        let hint = create_element(document, "div", "heart-hint")?;
        hint.set_text_content(Some(ui::HINT_TEXT));
        set_style(&hint, "position", "absolute");
        set_style(&hint, "bottom", "1.5rem");
        set_style(&hint, "left", "50%");
        set_style(&hint, "transform", "translateX(-50%)");
        set_shown(&hint, false);
        append(&root, &hint)?;

        let badges = create_element(document, "div", "heart-badges")?;
        set_style(&badges, "position", "absolute");
        set_style(&badges, "top", "1rem");
        set_style(&badges, "right", "1rem");
        set_style(&badges, "pointer-events", "auto");
        let bpm = create_element(document, "div", "badge bpm")?;
        bpm.set_text_content(Some(ui::BPM_TEXT));
        let xray_button = create_element(document, "button", "badge xray")?;
        xray_button.set_text_content(Some(ui::xray_button_text(false)));
        let pick_badge = create_element(document, "div", "badge pick")?;
        set_shown(&pick_badge, false);
        append(&badges, &bpm)?;
        append(&badges, &xray_button)?;
        append(&badges, &pick_badge)?;
        append(&root, &badges)?;

        let loading = create_element(document, "div", "heart-loading")?;
        set_style(&loading, "position", "absolute");
        set_style(&loading, "inset", "0");
        set_style(&loading, "display", "flex");
        set_style(&loading, "flex-direction", "column");
        set_style(&loading, "align-items", "center");
        set_style(&loading, "justify-content", "center");
        let track = create_element(document, "div", "track")?;
        set_style(&track, "width", "12rem");
        set_style(&track, "height", "4px");
        set_style(&track, "background", "#e2e8f0");
        let loading_bar = create_element(document, "div", "bar")?;
        set_style(&loading_bar, "height", "100%");
        set_style(&loading_bar, "width", "0%");
        set_style(&loading_bar, "background", "#64748b");
        append(&track, &loading_bar)?;
        let loading_text = create_element(document, "div", "percent")?;
        loading_text.set_text_content(Some(&ui::progress_text(0.0)));
        let did_you_know = create_element(document, "div", "fact")?;
        did_you_know.set_text_content(Some(fact));
        append(&loading, &track)?;
        append(&loading, &loading_text)?;
        append(&loading, &did_you_know)?;
        append(&root, &loading)?;

        append(parent, &root)?;

        Ok(Self {
            root,
            labels,
            region_buttons,
            tooltip,
            tooltip_dot,
            tooltip_name,
            detail,
            detail_body,
            detail_close,
            region_list,
            hint,
            xray_button,
            pick_badge,
            loading,
            loading_bar,
            loading_text,
            document: document.clone(),
            loaded: false,
            detail_for: None,
        })
    }

    pub fn label(&self, id: RegionId) -> Option<&web::HtmlElement> {
        self.labels.get(&id)
    }

    pub fn region_button(&self, id: RegionId) -> Option<&web::HtmlElement> {
        self.region_buttons.get(&id)
    }

    #[inline]
    pub fn detail_close(&self) -> &web::HtmlElement {
        &self.detail_close
    }

    #[inline]
    pub fn xray_button(&self) -> &web::HtmlElement {
        &self.xray_button
    }

    pub fn set_progress(&self, percent: f32) {
        set_style(&self.loading_bar, "width", &format!("{:.0}%", percent.clamp(0.0, 100.0)));
        self.loading_text
            .set_text_content(Some(&ui::progress_text(percent)));
    }

    /// Removes the loading screen and reveals labels and the region list.
    pub fn finish_loading(&mut self) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.loading.remove();
        set_shown(&self.region_list, true);
    }

    pub fn show_pick(&self, coord: &str) {
        self.pick_badge
            .set_text_content(Some(&ui::pick_badge_text(coord)));
        set_shown(&self.pick_badge, true);
    }

    /// Applies one frame of scene output to the DOM.
    pub fn update(
        &mut self,
        frame: &FrameOutput,
        selected: Option<RegionId>,
        hover: Option<Hover>,
        xray: bool,
    ) {
        let mut selected_at = None;
        for (id, el) in &self.labels {
            let placed = frame.labels.iter().find(|p| p.region == *id);
            match placed {
                Some(p) if self.loaded => {
                    set_style(el, "left", &ui::px(p.screen_x));
                    set_style(el, "top", &ui::px(p.screen_y));
                    let opacity = ui::label_opacity(*id, selected, hover.map(|h| h.region));
                    set_style(el, "opacity", &opacity.to_string());
                    set_shown(el, true);
                    let _ = el
                        .class_list()
                        .toggle_with_force("selected", selected == Some(*id));
                    if selected == Some(*id) {
                        selected_at = Some((p.screen_x, p.screen_y));
                    }
                }
                _ => set_shown(el, false),
            }
        }

        if self.detail_for != selected {
            self.detail_for = selected;
            if let Some(r) = selected.and_then(region) {
                if let Err(e) = self.fill_detail(r) {
                    log::error!("[ui] detail panel: {:?}", e);
                }
            }
        }
        match selected_at {
            Some((x, y)) => {
                set_style(&self.detail, "left", &ui::px(x));
                set_style(&self.detail, "top", &ui::px(y));
                set_shown(&self.detail, true);
            }
            None => set_shown(&self.detail, false),
        }

        match (ui::tooltip_position(hover, selected), hover.and_then(|h| region(h.region))) {
            (Some((x, y)), Some(r)) if self.loaded => {
                self.tooltip_name.set_text_content(Some(r.name));
                set_style(&self.tooltip_dot, "background", &r.color.to_hex());
                set_style(
                    &self.tooltip,
                    "border",
                    &format!("1px solid {}", r.color.to_hex_alpha(0x44)),
                );
                set_style(&self.tooltip, "left", &ui::px(x));
                set_style(&self.tooltip, "top", &ui::px(y));
                set_shown(&self.tooltip, true);
            }
            _ => set_shown(&self.tooltip, false),
        }

        for (id, button) in &self.region_buttons {
            let bg = match region(*id) {
                Some(r) if selected == Some(*id) => r.color.to_hex_alpha(0x25),
                _ => "transparent".to_string(),
            };
            set_style(button, "background", &bg);
        }

        set_shown(&self.hint, ui::hint_visible(selected, self.loaded));
        self.xray_button
            .set_text_content(Some(ui::xray_button_text(xray)));
    }

    fn fill_detail(&self, r: &Region) -> anyhow::Result<()> {
        self.detail_body.set_text_content(None);
        set_style(&self.detail, "border-top", &format!("3px solid {}", r.color.to_hex()));

        let title = create_element(&self.document, "h2", "title")?;
        title.set_text_content(Some(r.name));
        append(&self.detail_body, &title)?;

        let description = create_element(&self.document, "p", "description")?;
        description.set_text_content(Some(r.description));
        append(&self.detail_body, &description)?;

        let heading = create_element(&self.document, "div", "heading")?;
        heading.set_text_content(Some("Primary Functions"));
        append(&self.detail_body, &heading)?;
        let list = create_element(&self.document, "ul", "functions")?;
        for f in r.functions.iter().take(ui::DETAIL_MAX_FUNCTIONS) {
            let item = create_element(&self.document, "li", "")?;
            item.set_text_content(Some(*f));
            append(&list, &item)?;
        }
        append(&self.detail_body, &list)?;

        if let Some(fact) = r.headline_fact() {
            let heading = create_element(&self.document, "div", "heading")?;
            heading.set_text_content(Some("Interesting Fact"));
            let p = create_element(&self.document, "p", "fact")?;
            p.set_text_content(Some(fact));
            append(&self.detail_body, &heading)?;
            append(&self.detail_body, &p)?;
        }
        Ok(())
    }

    /// Removes every element this overlay added.
    pub fn remove(&self) {
        self.root.remove();
    }
}

fn build_label(document: &web::Document, r: &Region) -> anyhow::Result<web::HtmlElement> {
    let label = create_element(document, "div", "heart-label")?;
    label.set_attribute("data-region", r.id.as_str()).ok();
    set_style(&label, "position", "absolute");
    set_style(&label, "transform", "translate(-50%, -50%)");
    set_style(&label, "pointer-events", "auto");
    set_style(&label, "cursor", "pointer");
    set_style(&label, "transition", "opacity 0.3s");
    let marker = create_element(document, "span", r.geometry.css_class())?;
    set_style(&marker, "background", &r.color.to_hex());
    let name = create_element(document, "span", "name")?;
    name.set_text_content(Some(r.name));
    append(&label, &marker)?;
    append(&label, &name)?;
    set_shown(&label, false);
    Ok(label)
}

fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}
