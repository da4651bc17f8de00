pub mod component;
pub mod route;

pub use component::{
    Build, Component, ComponentSource, ComponentSpec, ComponentStatus,
    GitSource, ImageSource,
};
pub use route::{
    InsecureEdgeTerminationPolicy, Route, RoutePort, RouteSpec,
    RouteTargetReference, TlsConfig, TlsTermination,
};
