use crate::draw::list::DrawList;
use crate::scene::FrameContext;
use crate::scene::{garland, lights};

/// Fairy lights then garland, swaying with the tree.
pub(crate) fn layer(ctx: &FrameContext<'_>) -> DrawList {
    let geo = ctx.tree();
    let mut list = DrawList::new();
    let (bulbs, dots) = list.with_transform(geo.sway_transform(&ctx.phases), |l| {
        let bulbs = lights::draw(l, &geo, ctx.mode, &ctx.phases);
        let dots = garland::draw(l, &geo, ctx.size.ref_px(1.0));
        (bulbs, dots)
    });
    tracing::debug!(bulbs, garland_dots = dots, mode = ?ctx.mode, "ornaments");
    list
}
