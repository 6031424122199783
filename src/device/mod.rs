//! Device shadow model.
//!
//! A device that reports its state to AWS IoT Core is modelled as the
//! [`ReportableDevice`](traits::reportable_device::ReportableDevice)
//! capability: it produces a serializable property snapshot on demand, which
//! is wrapped into a shadow `state.reported` document.
//!
//! # Contents
//!
//! - `ThingDevice`: the application device (id, manufacturer, model, last update time, slots)
//! - `SlotInfo`: power bank slot state
//! - `ShadowUpdateType` / `ShadowUpdateMessage`: shadow update topics and payloads
//!
//! # Example
//!
//! ```rust,ignore
//! use iotcore_keystore::device::structs::thing_device::ThingDevice;
//! use iotcore_keystore::device::traits::reportable_device::ReportableDevice;
//!
//! let device = ThingDevice::new("TestSimpleIot");
//! let document = device.report()?;
//! // {"state":{"reported":{"id":"TestSimpleIot", ...}}}
//! ```

/// Timestamp helpers shared by the device types.
#[allow(clippy::module_inception)]
pub mod device;

/// Shadow update type enumeration.
pub mod enums;

/// Implementation blocks for the device types.
pub mod impls;

/// Device data structures.
pub mod structs;

/// Device capability traits.
pub mod traits;
