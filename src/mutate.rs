use dot11_frame::frame::components::{ElementError, InformationElement, MacAddress};
use dot11_frame::Frame;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MutateError {
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error("The frame carries no SSID element to rewrite")]
    NoSsidElement,
}

/// Every edit requested on the command line, parsed and ready to apply.
#[derive(Debug, Default)]
pub struct EditPlan {
    /// New payload for the first SSID element.
    pub ssid: Option<Vec<u8>>,
    /// New transmitter address (address 2).
    pub source: Option<MacAddress>,
    /// New BSSID (address 3).
    pub bssid: Option<MacAddress>,
    /// Two indices to exchange in the element list.
    pub swap: Option<(usize, usize)>,
    /// Per-index payload overwrites.
    pub payload_sets: Vec<(usize, Vec<u8>)>,
    /// Per-index element id overwrites.
    pub retags: Vec<(usize, u8)>,
}

impl EditPlan {
    pub fn is_empty(&self) -> bool {
        self.ssid.is_none()
            && self.source.is_none()
            && self.bssid.is_none()
            && self.swap.is_none()
            && self.payload_sets.is_empty()
            && self.retags.is_empty()
    }
}

/// Parse an `INDEX:HEXBYTES` payload overwrite.
pub fn parse_payload_set(input: &str) -> Result<(usize, Vec<u8>), String> {
    let (index, hexbytes) = input
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:HEXBYTES, got \"{input}\""))?;
    let index = index
        .parse()
        .map_err(|error| format!("bad element index \"{index}\": {error}"))?;
    let bytes = hex::decode(hexbytes)
        .map_err(|error| format!("bad payload hex \"{hexbytes}\": {error}"))?;
    Ok((index, bytes))
}

/// Parse an `INDEX:ID` element id overwrite.
pub fn parse_retag(input: &str) -> Result<(usize, u8), String> {
    let (index, id) = input
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:ID, got \"{input}\""))?;
    let index = index
        .parse()
        .map_err(|error| format!("bad element index \"{index}\": {error}"))?;
    let id = id
        .parse()
        .map_err(|error| format!("bad element id \"{id}\": {error}"))?;
    Ok((index, id))
}

/// Apply the plan to a frame. Any failing edit aborts the whole plan.
///
/// Indexed edits run first and refer to the element order as captured.
/// The swap follows, then the SSID rewrite, which targets the first SSID
/// element wherever the swap left it. Address overwrites come last.
pub fn apply(frame: &mut Frame, plan: &EditPlan) -> Result<(), MutateError> {
    let elements = frame.elements_mut();

    for (index, id) in &plan.retags {
        elements.get_mut(*index)?.set_id(*id);
    }

    for (index, payload) in &plan.payload_sets {
        elements.get_mut(*index)?.set_payload(payload.clone())?;
    }

    if let Some((first, second)) = plan.swap {
        elements.swap(first, second)?;
    }

    if let Some(ssid) = &plan.ssid {
        elements
            .first_of_mut(InformationElement::SSID)
            .ok_or(MutateError::NoSsidElement)?
            .set_payload(ssid.clone())?;
    }

    let header = frame.header_mut();
    if let Some(source) = plan.source {
        header.address_2 = source;
    }
    if let Some(bssid) = plan.bssid {
        header.address_3 = bssid;
    }

    Ok(())
}
