//! SequentialModel: a fixed chain of layers sharing one fixed-point format.
//!
//! ```text
//! Input → Layer[0] → Layer[1] → ... → Layer[N-1] → Output
//!           ping      pong      ping     (caller)
//! ```
//!
//! The chain is validated once, when the model is built: consecutive shapes
//! must match and the declared input/output element counts must match the
//! `IN`/`OUT` parameters. Binding a scratch buffer checks it against the
//! buffer plan and yields a `ModelArena` tied to that model; inference runs
//! through it without any check that can fail.

use tracing::{debug, warn};

use crate::arena::{Arena, BufferPlan, Region};
use crate::error::{FxError, FxResult};
use crate::layers::{Layer, Shape};
use crate::math;
use crate::number::Number;
use crate::tensor::Tensor;

/// Upper bound on the number of layers in one model.
///
/// Stage shapes are kept in a fixed array; no allocator is needed.
pub const MAX_LAYERS: usize = 16;

/// Where the current activation lives while walking the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Input,
    Arena(Region),
    Output,
}

impl Slot {
    /// Region a computing stage reading from `self` writes into.
    const fn write_target(self) -> Region {
        match self {
            Slot::Arena(region) => region.other(),
            Slot::Input | Slot::Output => Region::Ping,
        }
    }
}

/// A sequential model over `Q`-format layers, `IN` input and `OUT` output
/// elements.
///
/// # Lifetime `'m`
/// The model borrows its layer list. On an MCU the layers and the list are
/// `static`s next to the weight tables.
pub struct SequentialModel<'m, const Q: u32, const IN: usize, const OUT: usize> {
    layers: &'m [&'m dyn Layer<Q>],
    /// `shapes[i]` is the input of layer `i`; `shapes[layers.len()]` the output.
    shapes: [Shape; MAX_LAYERS + 1],
    /// Last layer that computes; it writes straight into the caller's output.
    last_compute: Option<usize>,
    plan: BufferPlan,
}

impl<'m, const Q: u32, const IN: usize, const OUT: usize> SequentialModel<'m, Q, IN, OUT> {
    /// Validate the chain and compute the activation buffer plan.
    pub fn new(layers: &'m [&'m dyn Layer<Q>], input_shape: Shape) -> FxResult<Self> {
        if layers.len() > MAX_LAYERS {
            warn!(count = layers.len(), max = MAX_LAYERS, "too many layers");
            return Err(FxError::TooManyLayers {
                count: layers.len(),
                max: MAX_LAYERS,
            });
        }
        if input_shape.total() != IN {
            warn!(expected = IN, actual = input_shape.total(), "model input size mismatch");
            return Err(FxError::DimensionMismatch {
                expected: IN,
                actual: input_shape.total(),
            });
        }

        let mut shapes = [Shape::d1(0); MAX_LAYERS + 1];
        shapes[0] = input_shape;
        for (i, layer) in layers.iter().enumerate() {
            shapes[i + 1] = layer.output_shape(&shapes[i]).inspect_err(|err| {
                warn!(index = i, layer = layer.name(), %err, "layer rejected its input shape");
            })?;
            debug!(
                index = i,
                layer = layer.name(),
                channels = shapes[i + 1].channels(),
                samples = shapes[i + 1].samples(),
                "layer output shape"
            );
        }

        let output_total = shapes[layers.len()].total();
        if output_total != OUT {
            warn!(expected = OUT, actual = output_total, "model output size mismatch");
            return Err(FxError::DimensionMismatch {
                expected: OUT,
                actual: output_total,
            });
        }

        let last_compute = layers.iter().rposition(|layer| !layer.is_reshape());
        let mut model = Self {
            layers,
            shapes,
            last_compute,
            plan: BufferPlan::default(),
        };
        model.plan = model.plan_buffers();
        debug!(
            ping = model.plan.region_len(Region::Ping),
            pong = model.plan.region_len(Region::Pong),
            "activation buffer plan"
        );
        Ok(model)
    }

    /// Walk the chain with the same placement rule `forward` uses and size
    /// each region for the largest activation it ever holds.
    fn plan_buffers(&self) -> BufferPlan {
        let mut plan = BufferPlan::default();
        let mut slot = Slot::Input;
        for (i, layer) in self.layers.iter().enumerate() {
            if layer.is_reshape() {
                continue;
            }
            if Some(i) == self.last_compute {
                slot = Slot::Output;
            } else {
                let target = slot.write_target();
                plan.reserve(target, self.shapes[i + 1].total());
                slot = Slot::Arena(target);
            }
        }
        plan
    }

    /// Bind a scratch buffer to this model's buffer plan.
    ///
    /// Fails if the buffer is shorter than `scratch_len()`. The returned
    /// arena borrows the model, so it can only ever run this model.
    pub fn arena<'a>(&'a self, buf: &'a mut [Number]) -> FxResult<ModelArena<'a, 'm, Q, IN, OUT>> {
        let arena = Arena::new(buf, self.plan).inspect_err(|err| warn!(%err, "cannot bind activation arena"))?;
        Ok(ModelArena { model: self, arena })
    }

    /// Intermediate activations alternate between the arena's regions;
    /// reshape layers keep the storage of their input.
    fn run(&self, input: &Tensor<IN>, output: &mut Tensor<OUT>, arena: &mut Arena<'_>) {
        let (ping, pong) = arena.regions();
        let mut slot = Slot::Input;

        for (i, layer) in self.layers.iter().enumerate() {
            if layer.is_reshape() {
                continue;
            }
            let in_len = self.shapes[i].total();
            let out_len = self.shapes[i + 1].total();
            let target = slot.write_target();
            let (src, dst): (&[Number], &mut [Number]) = match target {
                Region::Ping => (&*pong, &mut *ping),
                Region::Pong => (&*ping, &mut *pong),
            };
            let src = match slot {
                Slot::Input => input.as_slice(),
                _ => &src[..in_len],
            };

            if Some(i) == self.last_compute {
                layer.forward(src, output.as_mut_slice());
                slot = Slot::Output;
            } else {
                layer.forward(src, &mut dst[..out_len]);
                slot = Slot::Arena(target);
            }
        }

        // Chains without a computing layer are pure reshapes of the input.
        if slot == Slot::Input {
            output.as_mut_slice().copy_from_slice(input.as_slice());
        }
    }

    /// Scratch elements a bound arena needs.
    pub fn scratch_len(&self) -> usize {
        self.plan.total()
    }

    pub fn buffer_plan(&self) -> &BufferPlan {
        &self.plan
    }

    pub fn input_shape(&self) -> Shape {
        self.shapes[0]
    }

    pub fn output_shape(&self) -> Shape {
        self.shapes[self.layers.len()]
    }

    /// Shape produced by layer `idx`.
    pub fn stage_shape(&self, idx: usize) -> Option<Shape> {
        (idx < self.layers.len()).then(|| self.shapes[idx + 1])
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    pub fn layer(&self, idx: usize) -> Option<&dyn Layer<Q>> {
        self.layers.get(idx).copied()
    }
}

/// A scratch buffer bound to the model that sized it.
///
/// Built only by `SequentialModel::arena`, so its regions always cover the
/// model's buffer plan. Holding `&mut ModelArena` during inference keeps two
/// inferences from sharing one buffer set.
///
/// An arena cannot be assembled by hand:
///
/// ```compile_fail
/// use fxcnn_core::arena::Arena;
/// ```
pub struct ModelArena<'a, 'm, const Q: u32, const IN: usize, const OUT: usize> {
    model: &'a SequentialModel<'m, Q, IN, OUT>,
    arena: Arena<'a>,
}

impl<'m, const Q: u32, const IN: usize, const OUT: usize> ModelArena<'_, 'm, Q, IN, OUT> {
    /// Run one inference. The previous contents of the arena are
    /// overwritten.
    pub fn forward(&mut self, input: &Tensor<IN>, output: &mut Tensor<OUT>) {
        self.model.run(input, output, &mut self.arena);
    }

    /// Forward pass followed by argmax over the output vector.
    ///
    /// `None` only for a model with no outputs.
    pub fn predict(&mut self, input: &Tensor<IN>, output: &mut Tensor<OUT>) -> Option<usize> {
        self.forward(input, output);
        math::argmax(output.as_slice())
    }

    pub fn model(&self) -> &SequentialModel<'m, Q, IN, OUT> {
        self.model
    }

    /// Zero the scratch buffer, e.g. before handing it to another task.
    pub fn clear(&mut self) {
        self.arena.clear();
    }
}
