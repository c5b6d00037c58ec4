// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All burn model code lives here.
//
//   model.rs      — The punctuation classifier
//                   • Token, position and token-type embeddings
//                   • Post-LN transformer encoder blocks with
//                     padding-masked multi-head self-attention
//                   • Bidirectional LSTM over encoder states
//                   • Linear head: one logit per class per token
//
//   inferencer.rs — The inference engine
//                   Loads weights, stacks windows into batches,
//                   runs the forward pass, takes the argmax
//
// Reference: Burn Book §3 (Building Blocks)
//            Devlin et al. (2019) BERT
//            Alam et al. (2020) Punctuation Restoration using
//            Transformer Models for High- and Low-Resource Languages

/// Encoder + BiLSTM + classification head
pub mod model;

/// Inference engine — loads weights and predicts classes
pub mod inferencer;
