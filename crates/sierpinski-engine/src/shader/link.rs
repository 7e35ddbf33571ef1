use naga::{Binding, Handle, Module, ScalarKind, Type, TypeInner, VectorSize};

use super::{CompiledShader, ShaderError, ShaderProgram, ShaderStage, ENTRY_POINT};

/// Vertex attribute locations fed by the sample buffer (position, color).
const SAMPLE_LOCATIONS: [u32; 2] = [0, 1];

/// Color attachment written by the fragment stage.
const COLOR_TARGET_LOCATION: u32 = 0;

/// Links a vertex and a fragment stage into a program.
///
/// Checks performed:
/// - stages are a vertex/fragment pair with a `main` entry point each
/// - vertex inputs only use the sample attribute locations, as floats
/// - every fragment input is written by the vertex stage with the same type
/// - the fragment stage writes the color target as a `vec4`
pub fn link(vertex: CompiledShader, fragment: CompiledShader) -> Result<ShaderProgram, ShaderError> {
    if vertex.stage() != ShaderStage::Vertex || fragment.stage() != ShaderStage::Fragment {
        return Err(ShaderError::Link(format!(
            "expected a vertex + fragment pair, got {} + {}",
            vertex.stage(),
            fragment.stage()
        )));
    }

    let vs = Interface::of(&vertex)?;
    let fs = Interface::of(&fragment)?;

    for (location, inner) in &vs.inputs {
        if !SAMPLE_LOCATIONS.contains(location) {
            return Err(ShaderError::Link(format!(
                "vertex input at location {location} is not provided by the sample buffer"
            )));
        }
        if !is_f32(inner) {
            return Err(ShaderError::Link(format!(
                "vertex input at location {location} must be a float scalar or vector, found {inner:?}"
            )));
        }
    }

    for (location, inner) in &fs.inputs {
        let Some(written) = vs.output(*location) else {
            return Err(ShaderError::Link(format!(
                "fragment input at location {location} is not written by the vertex stage"
            )));
        };
        if written != inner {
            return Err(ShaderError::Link(format!(
                "type mismatch at location {location}: vertex writes {written:?}, fragment reads {inner:?}"
            )));
        }
    }

    let Some(color) = fs.output(COLOR_TARGET_LOCATION) else {
        return Err(ShaderError::Link(format!(
            "fragment stage does not write a color output at location {COLOR_TARGET_LOCATION}"
        )));
    };
    if !is_f32_vec4(color) {
        return Err(ShaderError::Link(format!(
            "color output at location {COLOR_TARGET_LOCATION} must be a vec4, found {color:?}"
        )));
    }

    Ok(ShaderProgram::from_linked(vertex, fragment))
}

/// User-defined (location-bound) inputs and outputs of an entry point.
struct Interface {
    inputs: Vec<(u32, TypeInner)>,
    outputs: Vec<(u32, TypeInner)>,
}

impl Interface {
    fn of(shader: &CompiledShader) -> Result<Self, ShaderError> {
        let module = shader.module();
        let stage = shader.stage().to_naga();

        let Some(entry) = module
            .entry_points
            .iter()
            .find(|ep| ep.stage == stage && ep.name == ENTRY_POINT)
        else {
            return Err(ShaderError::Link(format!(
                "{} shader {} has no `{ENTRY_POINT}` entry point",
                shader.stage(),
                shader.path().display()
            )));
        };

        let mut inputs = Vec::new();
        for arg in &entry.function.arguments {
            collect_locations(module, arg.ty, arg.binding.as_ref(), &mut inputs);
        }

        let mut outputs = Vec::new();
        if let Some(result) = &entry.function.result {
            collect_locations(module, result.ty, result.binding.as_ref(), &mut outputs);
        }

        Ok(Self { inputs, outputs })
    }

    fn output(&self, location: u32) -> Option<&TypeInner> {
        self.outputs
            .iter()
            .find(|(loc, _)| *loc == location)
            .map(|(_, inner)| inner)
    }
}

/// Flattens a binding (or a struct of bindings) into `(location, type)` pairs.
/// Built-ins such as `gl_Position` are skipped.
fn collect_locations(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    out: &mut Vec<(u32, TypeInner)>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => {
            out.push((*location, module.types[ty].inner.clone()));
        }
        Some(_) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_locations(module, member.ty, member.binding.as_ref(), out);
                }
            }
        }
    }
}

fn is_f32(inner: &TypeInner) -> bool {
    match inner {
        TypeInner::Scalar(scalar) | TypeInner::Vector { scalar, .. } => {
            scalar.kind == ScalarKind::Float && scalar.width == 4
        }
        _ => false,
    }
}

fn is_f32_vec4(inner: &TypeInner) -> bool {
    matches!(inner, TypeInner::Vector { size: VectorSize::Quad, .. }) && is_f32(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::test_sources::{assets_dir, FRAGMENT, VERTEX};
    use crate::shader::{compile, ShaderPath, ShaderSource};

    fn vs(text: &str) -> CompiledShader {
        compile(&ShaderSource::new(ShaderStage::Vertex, "test.vert", text)).unwrap()
    }

    fn fs(text: &str) -> CompiledShader {
        compile(&ShaderSource::new(ShaderStage::Fragment, "test.frag", text)).unwrap()
    }

    fn link_error(result: Result<ShaderProgram, ShaderError>) -> String {
        match result {
            Err(ShaderError::Link(msg)) => msg,
            Err(other) => panic!("expected a link error, got {other}"),
            Ok(_) => panic!("expected a link error, program linked"),
        }
    }

    #[test]
    fn matching_pair_links() {
        assert!(link(vs(VERTEX), fs(FRAGMENT)).is_ok());
    }

    #[test]
    fn shipped_assets_link() {
        let dir = assets_dir();
        let vertex = ShaderPath::new(ShaderStage::Vertex, dir.join("Default.vert")).unwrap();
        let fragment = ShaderPath::new(ShaderStage::Fragment, dir.join("Default.frag")).unwrap();

        let vertex = compile(&vertex.load().unwrap()).unwrap();
        let fragment = compile(&fragment.load().unwrap()).unwrap();
        assert!(link(vertex, fragment).is_ok());
    }

    #[test]
    fn swapped_stages_do_not_link() {
        let msg = link_error(link(fs(FRAGMENT), vs(VERTEX)));
        assert!(msg.contains("vertex + fragment"));
    }

    #[test]
    fn unwritten_fragment_input_does_not_link() {
        let fragment = "#version 450
layout(location = 0) in vec3 v_color;
layout(location = 3) in vec3 v_extra;
layout(location = 0) out vec4 frag_color;
void main() {
    frag_color = vec4(v_color + v_extra, 1.0);
}
";
        let msg = link_error(link(vs(VERTEX), fs(fragment)));
        assert!(msg.contains("location 3"));
    }

    #[test]
    fn mismatched_varying_type_does_not_link() {
        let fragment = "#version 450
layout(location = 0) in vec4 v_color;
layout(location = 0) out vec4 frag_color;
void main() {
    frag_color = v_color;
}
";
        let msg = link_error(link(vs(VERTEX), fs(fragment)));
        assert!(msg.contains("type mismatch"));
    }

    #[test]
    fn extra_vertex_attribute_does_not_link() {
        let vertex = "#version 450
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_color;
layout(location = 2) in vec3 a_normal;
layout(location = 0) out vec3 v_color;
void main() {
    gl_Position = vec4(a_position + a_normal, 1.0);
    v_color = a_color;
}
";
        let msg = link_error(link(vs(vertex), fs(FRAGMENT)));
        assert!(msg.contains("location 2"));
    }

    #[test]
    fn missing_color_output_does_not_link() {
        let fragment = "#version 450
layout(location = 0) in vec3 v_color;
layout(location = 1) out vec4 other;
void main() {
    other = vec4(v_color, 1.0);
}
";
        let msg = link_error(link(vs(VERTEX), fs(fragment)));
        assert!(msg.contains("color output"));
    }

    #[test]
    fn integer_color_output_does_not_link() {
        let fragment = "#version 450
layout(location = 0) in vec3 v_color;
layout(location = 0) out ivec4 frag_color;
void main() {
    frag_color = ivec4(int(v_color.r), 0, 0, 255);
}
";
        let msg = link_error(link(vs(VERTEX), fs(fragment)));
        assert!(msg.contains("must be a vec4"));
    }

    #[test]
    fn narrow_color_output_does_not_link() {
        let fragment = "#version 450
layout(location = 0) in vec3 v_color;
layout(location = 0) out vec2 frag_color;
void main() {
    frag_color = v_color.xy;
}
";
        let msg = link_error(link(vs(VERTEX), fs(fragment)));
        assert!(msg.contains("must be a vec4"));
    }
}
