//! Shader compilation and program linking over a [`glow::Context`].
//!
//! The compilation and linking functions require a live GPU context and
//! clean up every partially-built GL object on their failure paths, so a
//! failed call never leaks a shader or program handle. The error
//! formatting utility is pure string processing and needs no context.

use std::fmt;

use thiserror::Error;

/// The pipeline stage a shader object is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderKind {
    Vertex,
    Fragment,
}

impl ShaderKind {
    /// The `glow` constant accepted by `create_shader`.
    pub fn gl_const(self) -> u32 {
        match self {
            ShaderKind::Vertex => glow::VERTEX_SHADER,
            ShaderKind::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderKind::Vertex => "vertex",
            ShaderKind::Fragment => "fragment",
        })
    }
}

/// Errors that can occur during shader compilation or program linking.
#[derive(Debug, Clone, Error)]
pub enum ShaderError {
    /// A shader stage failed to compile, or could not be allocated.
    #[error("shader compile error ({kind}):\n{log}")]
    CompileError {
        /// The stage that failed.
        kind: ShaderKind,
        /// The driver's info log, with numbered source prepended.
        log: String,
    },
    /// A program failed to link, or could not be allocated.
    #[error("program link error:\n{0}")]
    LinkError(String),
}

impl ShaderError {
    /// The stage a compile failure belongs to, if this is one.
    pub fn kind(&self) -> Option<ShaderKind> {
        match self {
            ShaderError::CompileError { kind, .. } => Some(*kind),
            ShaderError::LinkError(_) => None,
        }
    }
}

/// Formats a shader compilation failure for human-readable debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, then
/// appends the driver's `log`, so driver messages (which cite line
/// numbers) can be correlated with the actual GLSL.
pub fn format_shader_error(source: &str, log: &str) -> String {
    use std::fmt::Write;

    let width = source.lines().count().max(1).to_string().len();

    let mut numbered = String::new();
    for (index, line) in source.lines().enumerate() {
        if index > 0 {
            numbered.push('\n');
        }
        let _ = write!(numbered, "{:>width$}: {line}", index + 1);
    }

    match (numbered.is_empty(), log.is_empty()) {
        (true, _) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Compiles a single shader stage.
///
/// Returns the compiled shader handle, or a [`ShaderError::CompileError`]
/// carrying `kind` and the driver's info log. The partially-built shader
/// object is deleted before the error is returned.
///
/// # Errors
///
/// Returns `ShaderError::CompileError` if the shader object cannot be
/// allocated or the source fails to compile.
#[allow(unsafe_code)]
pub fn compile_shader(
    gl: &glow::Context,
    kind: ShaderKind,
    source: &str,
) -> Result<glow::Shader, ShaderError> {
    use glow::HasContext;

    // SAFETY: glow exposes raw GL calls as unsafe. kind.gl_const() is a
    // valid shader type and the handle is deleted on every failure path.
    let shader = unsafe { gl.create_shader(kind.gl_const()) }
        .map_err(|log| ShaderError::CompileError { kind, log })?;

    unsafe {
        gl.shader_source(shader, source);
        gl.compile_shader(shader);
    }

    if unsafe { gl.get_shader_compile_status(shader) } {
        return Ok(shader);
    }

    let log = unsafe { gl.get_shader_info_log(shader) };
    unsafe { gl.delete_shader(shader) };
    Err(ShaderError::CompileError {
        kind,
        log: format_shader_error(source, &log),
    })
}

/// Links compiled shaders into a program.
///
/// Attaches the shaders in the order given, links, and detaches them
/// afterward (the program retains its own copies). The input shaders are
/// never deleted; the caller keeps ownership of them on both the success
/// and failure path.
///
/// # Errors
///
/// Returns [`ShaderError::LinkError`] if the program cannot be allocated
/// or linking fails. The partially-built program object is deleted before
/// the error is returned.
#[allow(unsafe_code)]
pub fn link_program(
    gl: &glow::Context,
    shaders: &[glow::Shader],
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    // SAFETY: all handles come from prior successful glow calls, and the
    // program is deleted on the failure path.
    let program = unsafe { gl.create_program() }.map_err(ShaderError::LinkError)?;

    unsafe {
        for &shader in shaders {
            gl.attach_shader(program, shader);
        }
        gl.link_program(program);

        // Detach regardless of link outcome; the program owns copies.
        for &shader in shaders {
            gl.detach_shader(program, shader);
        }
    }

    if unsafe { gl.get_program_link_status(program) } {
        return Ok(program);
    }

    let log = unsafe { gl.get_program_info_log(program) };
    unsafe { gl.delete_program(program) };
    Err(ShaderError::LinkError(log))
}

/// Compiles a vertex and a fragment source and links them into a program.
///
/// Convenience wrapper around [`compile_shader`] and [`link_program`].
/// The intermediate shader objects are deleted once linking has run,
/// whatever its outcome; the linked program keeps its own copies. If the
/// fragment stage fails to compile, the already-compiled vertex shader is
/// deleted and the linker is never invoked.
///
/// # Errors
///
/// Returns [`ShaderError::CompileError`] if either stage fails to
/// compile, or [`ShaderError::LinkError`] if linking fails.
#[allow(unsafe_code)]
pub fn compile_program(
    gl: &glow::Context,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<glow::Program, ShaderError> {
    use glow::HasContext;

    let vertex = compile_shader(gl, ShaderKind::Vertex, vertex_src)?;
    let fragment = match compile_shader(gl, ShaderKind::Fragment, fragment_src) {
        Ok(shader) => shader,
        Err(err) => {
            // SAFETY: vertex is a valid handle from a successful compile.
            unsafe { gl.delete_shader(vertex) };
            return Err(err);
        }
    };

    let result = link_program(gl, &[vertex, fragment]);

    // SAFETY: both handles are valid; the linked program (if any) retains
    // its own copies, so deleting these here is correct.
    unsafe {
        gl.delete_shader(vertex);
        gl.delete_shader(fragment);
    }

    result
}
