pub mod package;

pub use package::{Package, PackageDescriptor, PortMapping, VolumeMount};
