use crate::{error, interop, Editor};
use gridmesh::canvas::{self, HIT_THRESHOLD};
use gridmesh::{Tool, VertexId};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn tool_name(tool: Tool) -> &'static str {
    match tool {
        Tool::VertexAdd => "vertex_add",
        Tool::VertexRemove => "vertex_remove",
        Tool::VertexMove => "vertex_move",
        Tool::EdgeAdd => "edge_add",
        Tool::EdgeRemove => "edge_remove",
        Tool::EdgeMove => "edge_move",
    }
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new(screen_w: f32, screen_h: f32) -> Editor {
        crate::Editor::rs_new(screen_w, screen_h)
    }

    // Input events

    pub fn on_wheel(&mut self, screen_x: f32, screen_y: f32, delta_x: f32, delta_y: f32) {
        self.inner.on_wheel(screen_x, screen_y, delta_x, delta_y);
    }
    pub fn on_pointer_move(
        &mut self,
        screen_x: f32,
        screen_y: f32,
        movement_x: f32,
        movement_y: f32,
    ) {
        self.inner
            .on_pointer_move(screen_x, screen_y, movement_x, movement_y);
    }
    pub fn on_pointer_down(&mut self) {
        self.inner.on_pointer_down();
    }
    pub fn on_pointer_up(&mut self) {
        self.inner.on_pointer_up();
    }
    pub fn on_key_down(&mut self, key: &str) {
        self.inner.on_key_down(key);
    }
    pub fn on_key_up(&mut self, key: &str) {
        self.inner.on_key_up(key);
    }
    pub fn on_resize(&mut self, screen_w: f32, screen_h: f32) {
        self.inner.on_resize(screen_w, screen_h);
    }

    // Direct graph mutation (the pointer flow resolved to canvas space)

    pub fn create_vertex(&mut self, x: f32, y: f32) -> Option<u32> {
        let point = canvas::find_closest_grid_point(x, y, HIT_THRESHOLD)?;
        self.inner.state.matrix.create_vertex(point).map(|id| id.0)
    }
    pub fn create_vertex_res(&mut self, x: f32, y: f32) -> JsValue {
        if !x.is_finite() {
            return error::non_finite("x");
        }
        if !y.is_finite() {
            return error::non_finite("y");
        }
        let point = match canvas::find_closest_grid_point(x, y, HIT_THRESHOLD) {
            Some(p) => p,
            None => return error::off_grid(x, y),
        };
        match self.inner.state.matrix.create_vertex(point) {
            Some(id) => error::ok(JsValue::from_f64(id.0 as f64)),
            None => error::occupied(point.x, point.y),
        }
    }
    pub fn remove_vertex(&mut self, id: u32) -> bool {
        self.inner.state.matrix.remove_vertex(VertexId(id))
    }
    pub fn remove_vertex_res(&mut self, id: u32) -> JsValue {
        if self.inner.state.matrix.get_vertex(VertexId(id)).is_none() {
            return error::invalid_id("vertex", id);
        }
        error::ok(JsValue::from_bool(
            self.inner.state.matrix.remove_vertex(VertexId(id)),
        ))
    }
    pub fn create_edge(&mut self, a: u32, b: u32) -> bool {
        self.inner
            .state
            .matrix
            .create_edge(VertexId(a), VertexId(b))
            .is_some()
    }
    pub fn create_edge_res(&mut self, a: u32, b: u32) -> JsValue {
        if self.inner.state.matrix.get_vertex(VertexId(a)).is_none() {
            return error::invalid_id("vertex", a);
        }
        if self.inner.state.matrix.get_vertex(VertexId(b)).is_none() {
            return error::invalid_id("vertex", b);
        }
        if a == b {
            return error::err("self_loop", "edge endpoints cannot be the same vertex", None);
        }
        match self.inner.state.matrix.create_edge(VertexId(a), VertexId(b)) {
            Some(_) => error::ok(JsValue::TRUE),
            None => error::err("duplicate_edge", "the pair is already connected", None),
        }
    }
    pub fn remove_edge(&mut self, a: u32, b: u32) -> bool {
        let id = gridmesh::EdgeId::new(VertexId(a), VertexId(b));
        self.inner.state.matrix.remove_edge(id)
    }

    // Hover tracking, driven by the rendering layer's hit targets.

    pub fn set_hovering_vertex(&mut self, id: Option<u32>) {
        self.inner.state.matrix.hovering_vertex = id.map(VertexId);
    }
    pub fn set_hovering_edge(&mut self, a: u32, b: u32) {
        self.inner.state.matrix.hovering_edge =
            Some(gridmesh::EdgeId::new(VertexId(a), VertexId(b)));
    }
    pub fn clear_hovering_edge(&mut self) {
        self.inner.state.matrix.hovering_edge = None;
    }

    // State getters

    pub fn vertex_count(&self) -> u32 {
        self.inner.state.matrix.vertex_count() as u32
    }
    pub fn edge_count(&self) -> u32 {
        self.inner.state.matrix.edge_count() as u32
    }
    pub fn get_vertex_data(&self) -> JsValue {
        let va = self.inner.state.matrix.get_vertex_arrays();
        let obj = interop::new_obj();
        interop::set_kv(&obj, "ids", &interop::arr_u32(&va.ids).into());
        interop::set_kv(&obj, "positions", &interop::arr_f32(&va.positions).into());
        interop::set_kv(&obj, "drags", &interop::arr_f32(&va.drags).into());
        obj.into()
    }
    pub fn get_edge_data(&self) -> JsValue {
        let ea = self.inner.state.matrix.get_edge_arrays();
        let obj = interop::new_obj();
        interop::set_kv(&obj, "endpoints", &interop::arr_u32(&ea.endpoints).into());
        obj.into()
    }

    pub fn active_tool(&self) -> JsValue {
        match self.inner.state.cursor.tool {
            Some(t) => JsValue::from_str(tool_name(t)),
            None => JsValue::NULL,
        }
    }
    pub fn cursor_canvas_x(&self) -> f32 {
        self.inner.state.cursor.canvas.x
    }
    pub fn cursor_canvas_y(&self) -> f32 {
        self.inner.state.cursor.canvas.y
    }

    pub fn is_radial_active(&self) -> bool {
        self.inner.state.radial.is_active
    }
    pub fn radial_rotation(&self) -> i32 {
        self.inner.state.radial.rotation
    }
    pub fn radial_active_index(&self) -> u32 {
        self.inner.state.radial.active_index() as u32
    }
    pub fn radial_origin(&self) -> JsValue {
        let o = self.inner.state.radial.origin;
        serde_wasm_bindgen::to_value(&vec![o.x, o.y]).unwrap_or(JsValue::NULL)
    }

    pub fn pan_x(&self) -> f32 {
        self.inner.state.canvas.pan_x()
    }
    pub fn pan_y(&self) -> f32 {
        self.inner.state.canvas.pan_y()
    }
    pub fn scroll_x(&self) -> f32 {
        self.inner.state.canvas.scroll_x()
    }
    pub fn scroll_y(&self) -> f32 {
        self.inner.state.canvas.scroll_y()
    }

    /// Closest grid point to `(x, y)` within `threshold`, as `[x, y]` or
    /// null.
    pub fn find_closest_grid_point(&self, x: f32, y: f32, threshold: f32) -> JsValue {
        match canvas::find_closest_grid_point(x, y, threshold) {
            Some(p) => serde_wasm_bindgen::to_value(&vec![p.x, p.y]).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    /// Whole-store JSON snapshot for the rendering layer.
    pub fn snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.inner.snapshot()).unwrap_or(JsValue::NULL)
    }

    /// Dumps the snapshot to the browser console.
    pub fn log_state(&self) {
        web_sys::console::log_1(&JsValue::from_str(&self.inner.snapshot().to_string()));
    }
}
