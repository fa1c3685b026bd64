use std::fmt;

/// The kind of a pooled renderable.
///
/// Two handles of the same kind are interchangeable: the pool keeps one
/// free list per kind and any free handle of the right kind satisfies an
/// acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    /// Solid sphere. Also used for point markers.
    Sphere,
    /// Solid oriented box.
    Box,
    /// Single line segment. Wire boxes are built from twelve of these.
    Line,
    /// Flat circle outline. Wire spheres are built from three of these.
    Ring,
    /// Solid cylinder.
    Cylinder,
    /// Solid cone. Also used for arrow heads.
    Cone,
    /// Screen-facing container that hosts a text label.
    TextContainer,
    /// Text label placed inside a [`ResourceKind::TextContainer`].
    TextLabel,
}

impl ResourceKind {
    /// All kinds, in declaration order.
    pub const ALL: [ResourceKind; 8] = [
        ResourceKind::Sphere,
        ResourceKind::Box,
        ResourceKind::Line,
        ResourceKind::Ring,
        ResourceKind::Cylinder,
        ResourceKind::Cone,
        ResourceKind::TextContainer,
        ResourceKind::TextLabel,
    ];

    /// Whether hiding this kind must be delayed to avoid a one-frame flash.
    ///
    /// Hosts composite text containers a frame late; hiding one in the same
    /// tick it was shown makes it blink.
    pub fn defers_hide(self) -> bool {
        matches!(self, ResourceKind::TextContainer)
    }

    /// Host-facing class name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Sphere => "Sphere",
            ResourceKind::Box => "Box",
            ResourceKind::Line => "Line",
            ResourceKind::Ring => "Ring",
            ResourceKind::Cylinder => "Cylinder",
            ResourceKind::Cone => "Cone",
            ResourceKind::TextContainer => "TextContainer",
            ResourceKind::TextLabel => "TextLabel",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Opaque reference to a pooled renderable.
///
/// Handles are minted by the [`ResourcePool`](crate::ResourcePool) and are
/// never destroyed; ids are unique for the lifetime of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle {
    kind: ResourceKind,
    id: u32,
}

impl Handle {
    pub(crate) fn new(kind: ResourceKind, id: u32) -> Self {
        Self { kind, id }
    }

    /// The kind of renderable this handle refers to.
    pub fn kind(self) -> ResourceKind {
        self.kind
    }

    /// Pool-unique id.
    pub fn id(self) -> u32 {
        self.id
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}
