use burn::{
    nn::{
        attention::{MhaInput, MultiHeadAttention, MultiHeadAttentionConfig},
        BiLstm, BiLstmConfig,
        Dropout, DropoutConfig,
        Embedding, EmbeddingConfig,
        LayerNorm, LayerNormConfig,
        Linear, LinearConfig,
    },
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally — do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct PunctuationModelConfig {
    pub vocab_size:      usize,
    pub max_position:    usize,
    pub type_vocab_size: usize,
    pub hidden_size:     usize,
    pub num_heads:       usize,
    pub num_layers:      usize,
    pub d_ff:            usize,
    pub lstm_dim:        usize,
    pub num_classes:     usize,
    /// First position id; RoBERTa-style encoders start after the pad id
    #[config(default = 0)]
    pub position_offset: usize,
    #[config(default = 1e-12)]
    pub layer_norm_eps:  f64,
    #[config(default = 0.0)]
    pub dropout:         f64,
}

impl PunctuationModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> PunctuationModel<B> {
        let token_embedding    = EmbeddingConfig::new(self.vocab_size, self.hidden_size).init(device);
        let position_embedding = EmbeddingConfig::new(self.max_position, self.hidden_size).init(device);
        let type_embedding     = EmbeddingConfig::new(self.type_vocab_size, self.hidden_size).init(device);
        let embedding_norm = LayerNormConfig::new(self.hidden_size)
            .with_epsilon(self.layer_norm_eps)
            .init(device);
        let layers: Vec<EncoderBlock<B>> = (0..self.num_layers)
            .map(|_| self.build_encoder_block(device))
            .collect();
        let lstm       = BiLstmConfig::new(self.hidden_size, self.lstm_dim, true).init(device);
        let classifier = LinearConfig::new(self.lstm_dim * 2, self.num_classes).init(device);
        let dropout    = DropoutConfig::new(self.dropout).init();
        PunctuationModel {
            token_embedding, position_embedding, type_embedding, embedding_norm,
            layers, lstm, classifier, dropout,
            position_offset: self.position_offset,
        }
    }

    fn build_encoder_block<B: Backend>(&self, device: &B::Device) -> EncoderBlock<B> {
        let self_attn   = MultiHeadAttentionConfig::new(self.hidden_size, self.num_heads)
            .with_dropout(self.dropout)
            .init(device);
        let ffn_linear1 = LinearConfig::new(self.hidden_size, self.d_ff).init(device);
        let ffn_linear2 = LinearConfig::new(self.d_ff, self.hidden_size).init(device);
        let norm1   = LayerNormConfig::new(self.hidden_size).with_epsilon(self.layer_norm_eps).init(device);
        let norm2   = LayerNormConfig::new(self.hidden_size).with_epsilon(self.layer_norm_eps).init(device);
        let dropout = DropoutConfig::new(self.dropout).init();
        EncoderBlock { self_attn, ffn_linear1, ffn_linear2, norm1, norm2, dropout }
    }
}

/// Post-LN encoder block: attention → add & norm → GELU FFN → add & norm
#[derive(Module, Debug)]
pub struct EncoderBlock<B: Backend> {
    pub self_attn:   MultiHeadAttention<B>,
    pub ffn_linear1: Linear<B>,
    pub ffn_linear2: Linear<B>,
    pub norm1:       LayerNorm<B>,
    pub norm2:       LayerNorm<B>,
    pub dropout:     Dropout,
}

impl<B: Backend> EncoderBlock<B> {
    /// `mask_pad` is true where the position is padding.
    pub fn forward(&self, x: Tensor<B, 3>, mask_pad: Tensor<B, 2, Bool>) -> Tensor<B, 3> {
        let attn_input  = MhaInput::self_attn(x.clone()).mask_pad(mask_pad);
        let attn_output = self.self_attn.forward(attn_input).context;
        let x = self.norm1.forward(x + self.dropout.forward(attn_output));
        let ffn_out = self.ffn_linear2.forward(
            burn::tensor::activation::gelu(self.ffn_linear1.forward(x.clone()))
        );
        self.norm2.forward(x + self.dropout.forward(ffn_out))
    }
}

/// Pretrained encoder + bidirectional LSTM + per-token classifier.
#[derive(Module, Debug)]
pub struct PunctuationModel<B: Backend> {
    pub token_embedding:    Embedding<B>,
    pub position_embedding: Embedding<B>,
    pub type_embedding:     Embedding<B>,
    pub embedding_norm:     LayerNorm<B>,
    pub layers:             Vec<EncoderBlock<B>>,
    pub lstm:               BiLstm<B>,
    pub classifier:         Linear<B>,
    pub dropout:            Dropout,
    pub position_offset:    usize,
}

impl<B: Backend> PunctuationModel<B> {
    /// input_ids, attention_mask: [batch, seq_len] → logits: [batch, seq_len, num_classes]
    pub fn forward(&self, input_ids: Tensor<B, 2, Int>, attention_mask: Tensor<B, 2, Int>) -> Tensor<B, 3> {
        let [batch_size, seq_len] = input_ids.dims();
        let device = input_ids.device();

        let tok_emb = self.token_embedding.forward(input_ids);

        let start = self.position_offset as i64;
        let positions = Tensor::<B, 1, Int>::arange(start..start + seq_len as i64, &device)
            .unsqueeze::<2>()
            .expand([batch_size, seq_len]);
        let pos_emb = self.position_embedding.forward(positions);

        // Single-segment input: every token has type 0
        let token_types = Tensor::<B, 2, Int>::zeros([batch_size, seq_len], &device);
        let type_emb = self.type_embedding.forward(token_types);

        let mut x = self.dropout.forward(self.embedding_norm.forward(tok_emb + pos_emb + type_emb));

        let mask_pad = attention_mask.equal_elem(0);
        for layer in &self.layers {
            x = layer.forward(x, mask_pad.clone());
        }

        let (x, _state) = self.lstm.forward(x, None);
        self.classifier.forward(x)
    }

    /// Argmax class per position: [batch, seq_len]
    pub fn predict(&self, input_ids: Tensor<B, 2, Int>, attention_mask: Tensor<B, 2, Int>) -> Tensor<B, 2, Int> {
        let [batch_size, seq_len] = input_ids.dims();
        self.forward(input_ids, attention_mask)
            .argmax(2)
            .reshape([batch_size, seq_len])
    }
}
