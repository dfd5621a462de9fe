/// The pass-through vertex stage: maps a unit quad to clip space and
/// hands the fragment stage a per-pixel `uv` coordinate. Unlike the
/// fragment stage it has nothing baked in, so the text is constant.
#[must_use]
pub fn vertex_shader() -> String {
    "\
#version 130

in vec3 vertexPosition;
out vec2 uv;

void main(void)
{
    gl_Position = vec4(vertexPosition.xy * 2.0 - 1.0, 0.5, 1.0);
    uv = (vec2(gl_Position.x, -gl_Position.y) + vec2(1.0)) / vec2(2.0);
}
"
    .to_string()
}
