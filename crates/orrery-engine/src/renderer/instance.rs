use bytemuck::{Pod, Zeroable};

/// Per-node render data read by the host renderer through a raw pointer.
/// Must match the host protocol: 20 floats = 80 bytes stride.
///
/// How `radius` is used depends on `kind`: sphere radius for bodies and
/// cloud shells (the matrix carries the cloud scale), annulus bounds
/// `1.2·radius..2·radius` for rings. Glow sprites are unit quads scaled
/// by the matrix.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct NodeInstance {
    /// Column-major world matrix.
    pub world: [[f32; 4]; 4],
    /// `NodeKind::code`.
    pub kind: f32,
    /// Owning body index.
    pub body: f32,
    /// 0.0 = invisible, 1.0 = opaque.
    pub opacity: f32,
    /// Owning body's radius.
    pub radius: f32,
}

impl NodeInstance {
    pub const FLOATS: usize = 20;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer rebuilt every frame.
#[derive(Debug)]
pub struct RenderBuffer {
    pub instances: Vec<NodeInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: NodeInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for direct memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
