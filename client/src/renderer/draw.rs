use wgpu::*;

use crate::renderer::batch::clear_color;

use super::viewport::Viewport;
use super::Renderer;

/// Record the single pass: clear to black, then every quad instance
/// letterboxed into `viewport`
pub fn encode_frame(
    renderer: &Renderer,
    encoder: &mut CommandEncoder,
    view: &TextureView,
    viewport: Viewport,
) {
    let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
        label: Some("Main Pass"),
        color_attachments: &[Some(RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops: Operations {
                load: LoadOp::Clear(clear_color()),
                store: StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });

    if renderer.buffers.instance_count == 0 {
        return;
    }

    pass.set_viewport(
        viewport.x,
        viewport.y,
        viewport.width,
        viewport.height,
        0.0,
        1.0,
    );
    pass.set_pipeline(&renderer.quad_pipeline.pipeline);
    pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

    pass.set_vertex_buffer(0, renderer.quad.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, renderer.buffers.instances.slice(..));
    pass.set_index_buffer(renderer.quad.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(
        0..renderer.quad.index_count,
        0,
        0..renderer.buffers.instance_count,
    );
}
