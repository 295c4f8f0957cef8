//! IN/OUT/INOUT orchestration between live parameter lists and the wire.

use crate::cursor::{wire_signature, AppendCursor, ArgEnumerator};
use crate::error::MarshalError;
use crate::message::Message;
use crate::registry::match_type;
use crate::signature::MethodSignature;
use wire_types::{HostValue, WireType, WireValue};

/// Appends a call's results to the message: the return value (when the
/// method declares one) followed by every OUT/INOUT parameter's current
/// value, in declaration order. IN-only parameters are skipped.
///
/// `parameters` must hold one live value per formal parameter; OUT and
/// INOUT values are read here, after the call body has produced them. A
/// supplied return value for a void method is ignored, matching the
/// calling convention of the reply path.
pub fn append_results<M: Message>(
    method: &MethodSignature,
    return_value: Option<&HostValue>,
    parameters: &[HostValue],
    message: &mut M,
) -> Result<(), MarshalError> {
    if parameters.len() != method.parameters().len() {
        return Err(MarshalError::SignatureMismatch {
            expected: format!("{} parameters", method.parameters().len()),
            found: format!("{} parameters", parameters.len()),
        });
    }
    if method.return_type().is_some() && return_value.is_none() {
        return Err(MarshalError::SignatureMismatch {
            expected: "a return value".to_string(),
            found: "none".to_string(),
        });
    }

    let mut cursor = AppendCursor::begin(message);
    if let (Some(return_type), Some(value)) = (method.return_type(), return_value) {
        let wire = match_type(return_type)?;
        cursor.append(WireValue::new(wire, value.clone())?)?;
    }
    for (parameter, value) in method.parameters().iter().zip(parameters) {
        if parameter.direction().is_written() {
            let wire = match_type(parameter.host_type())?;
            cursor.append(WireValue::new(wire, value.clone())?)?;
        }
    }
    Ok(())
}

/// Decodes a call's IN/INOUT parameters from the message in declaration
/// order, producing `None` placeholders for OUT-only parameters.
///
/// The buffer must hold exactly one element per IN/INOUT parameter; a
/// shortfall fails with [`MarshalError::SignatureMismatch`] rather than
/// returning a partial list.
pub fn get_parameters<M: Message>(
    method: &MethodSignature,
    message: &M,
) -> Result<Vec<Option<HostValue>>, MarshalError> {
    let mut cursor = ArgEnumerator::new(message);
    let mut values = Vec::with_capacity(method.parameters().len());
    for parameter in method.parameters() {
        if parameter.direction().is_read() {
            if !cursor.move_next() || cursor.at_end() {
                return Err(MarshalError::SignatureMismatch {
                    expected: expected_signature(method)?,
                    found: wire_signature(message)?,
                });
            }
            let element = cursor.current()?;
            values.push(Some(element.get(parameter.host_type())?));
        } else {
            values.push(None);
        }
    }
    Ok(values)
}

/// Decodes a reply: the return value (when declared) followed by OUT/INOUT
/// parameters in declaration order; IN-only slots are `None`.
///
/// This is the receive-side mirror of [`append_results`].
pub fn get_results<M: Message>(
    method: &MethodSignature,
    message: &M,
) -> Result<(Option<HostValue>, Vec<Option<HostValue>>), MarshalError> {
    let mut cursor = ArgEnumerator::new(message);
    let return_value = match method.return_type() {
        Some(return_type) => {
            if !cursor.move_next() || cursor.at_end() {
                return Err(reply_shortfall(method, message)?);
            }
            Some(cursor.current()?.get(return_type)?)
        }
        None => None,
    };
    let mut values = Vec::with_capacity(method.parameters().len());
    for parameter in method.parameters() {
        if parameter.direction().is_written() {
            if !cursor.move_next() || cursor.at_end() {
                return Err(reply_shortfall(method, message)?);
            }
            values.push(Some(cursor.current()?.get(parameter.host_type())?));
        } else {
            values.push(None);
        }
    }
    Ok((return_value, values))
}

/// Resolves the IN/INOUT parameters to their wire type descriptors, in
/// declaration order.
pub fn parse_in_parameters(method: &MethodSignature) -> Result<Vec<WireType>, MarshalError> {
    method
        .parameters()
        .iter()
        .filter(|parameter| parameter.direction().is_read())
        .map(|parameter| match_type(parameter.host_type()))
        .collect()
}

/// Resolves the OUT/INOUT parameters to their wire type descriptors, in
/// declaration order.
pub fn parse_out_parameters(method: &MethodSignature) -> Result<Vec<WireType>, MarshalError> {
    method
        .parameters()
        .iter()
        .filter(|parameter| parameter.direction().is_written())
        .map(|parameter| match_type(parameter.host_type()))
        .collect()
}

/// The expected wire signature of a call: the type codes of all IN/INOUT
/// parameters, concatenated in declaration order.
pub fn expected_signature(method: &MethodSignature) -> Result<String, MarshalError> {
    Ok(parse_in_parameters(method)?
        .iter()
        .map(|wire| wire.code())
        .collect())
}

/// Compares the method's expected signature against the signature actually
/// present in the message buffer, before any full decode.
pub fn check_signature<M: Message>(
    method: &MethodSignature,
    message: &M,
) -> Result<(), MarshalError> {
    let expected = expected_signature(method)?;
    let found = wire_signature(message)?;
    if expected != found {
        return Err(MarshalError::SignatureMismatch { expected, found });
    }
    Ok(())
}

fn reply_shortfall<M: Message>(
    method: &MethodSignature,
    message: &M,
) -> Result<MarshalError, MarshalError> {
    let mut expected = String::new();
    if let Some(return_type) = method.return_type() {
        expected.push(match_type(return_type)?.code());
    }
    for wire in parse_out_parameters(method)? {
        expected.push(wire.code());
    }
    Ok(MarshalError::SignatureMismatch {
        expected,
        found: wire_signature(message)?,
    })
}
