//! The countdown-timer kit that ships with Splice.
//!
//! Five literal files (MongoDB model and connection helper, an admin form,
//! a storefront widget and its Liquid block) plus the patch that wires the
//! database and the timer API into the app's Express server.

use splice_core::{
    application::ports::KitSource,
    domain::{DomainError, Kit, KitNotes, PatchPlan, ScaffoldPlan},
    error::SpliceResult,
};
use tracing::debug;

pub const BUILTIN_KIT_NAME: &str = "countdown-timer";

const TIMER_MODEL: &str = r##"
import mongoose from "mongoose";

const TimerSchema = new mongoose.Schema({
  shopDomain: { type: String, required: true, index: true },
  productId: { type: String, required: true },
  startDate: { type: Date, required: true },
  endDate: { type: Date, required: true },
  description: { type: String },
  settings: {
    color: { type: String, default: "#ff0000" },
    fontSize: { type: String, default: "16px" },
    urgencyTriggerMinutes: { type: Number, default: 5 }
  },
  isActive: { type: Boolean, default: true }
});

export default mongoose.models.Timer || mongoose.model("Timer", TimerSchema);
"##;

const DATABASE: &str = r##"
import mongoose from "mongoose";

const connectDB = async () => {
  if (mongoose.connections[0].readyState) return;

  try {
    await mongoose.connect(process.env.MONGODB_URI, {
      useNewUrlParser: true,
      useUnifiedTopology: true,
    });
    console.log("MongoDB Connected");
  } catch (error) {
    console.error("MongoDB Connection Failed:", error);
  }
};

export default connectDB;
"##;

const TIMER_FORM: &str = r##"
import { useState, useCallback } from "react";
import { Card, Form, FormLayout, TextField, Button, DatePicker } from "@shopify/polaris";

export default function TimerForm({ onSubmit }) {
  const [formData, setFormData] = useState({
    description: "",
    color: "#ff0000",
    startDate: new Date(),
    endDate: new Date()
  });

  const handleSubmit = useCallback(() => {
    onSubmit(formData);
  }, [formData, onSubmit]);

  return (
    <Card sectioned>
      <Form onSubmit={handleSubmit}>
        <FormLayout>
          <TextField
            label="Promotion Description"
            value={formData.description}
            onChange={(val) => setFormData({ ...formData, description: val })}
          />
          <TextField
            label="Timer Color (Hex)"
            value={formData.color}
            onChange={(val) => setFormData({ ...formData, color: val })}
          />
          {/* Add DatePickers here for Start/End Date */}
          <Button submit primary>Create Timer</Button>
        </FormLayout>
      </Form>
    </Card>
  );
}
"##;

const TIMER_WIDGET: &str = r##"
import { h, render } from 'preact';
import { useState, useEffect } from 'preact/hooks';

const CountdownWidget = ({ productId, shopDomain }) => {
  const [timeLeft, setTimeLeft] = useState(null);
  const [timerData, setTimerData] = useState(null);

  useEffect(() => {
    // Fetch timer config from your App Proxy or public API
    fetch(`https://your-app-url.com/api/timer?shop=${shopDomain}&product=${productId}`)
      .then(res => res.json())
      .then(data => setTimerData(data));
  }, [productId]);

  if (!timerData) return null;

  return (
    <div style={{ color: timerData.settings.color, padding: '10px', border: '1px solid #ddd' }}>
      <h3>{timerData.description}</h3>
      <div className="timer-display">
        {/* Timer calculation logic goes here */}
        Calculating...
      </div>
    </div>
  );
};

// Mount the widget to the DOM element created by the Liquid block
const target = document.getElementById('countdown-timer-root');
if (target) {
  const productId = target.dataset.productId;
  const shopDomain = target.dataset.shopDomain;
  render(<CountdownWidget productId={productId} shopDomain={shopDomain} />, target);
}
"##;

const TIMER_BLOCK: &str = r##"
{% schema %}
{
  "name": "Countdown Timer",
  "target": "section",
  "settings": []
}
{% endschema %}

<div id="countdown-timer-root"
     data-product-id="{{ product.id }}"
     data-shop-domain="{{ shop.permanent_domain }}">
</div>

<script src="{{ 'timer-widget.js' | asset_url }}" defer="defer"></script>
"##;

/// Substring whose presence in the entry file means the kit is wired in.
pub const SENTINEL: &str = "connectDB";

/// Only entry files that already import Express receive the import block.
pub const IMPORT_MARKER: &str = "import express from";

pub const BODY_ANCHOR: &str = r"(app\.listen\(|export default app)";

const IMPORT_BLOCK: &str = r#"
import connectDB from "./database.js";
import Timer from "./models/Timer.js";
"#;

const API_ROUTES: &str = r#"
// Connect to MongoDB
connectDB();

// API endpoint to get timers for a specific shop
app.get("/api/timer", async (req, res) => {
  try {
    const { shop, product } = req.query;

    if (!shop || !product) {
      return res.status(400).json({ error: "Missing shop or product parameter" });
    }

    const timer = await Timer.findOne({
      shopDomain: shop,
      productId: product,
      isActive: true,
      startDate: { $lte: new Date() },
      endDate: { $gte: new Date() }
    });

    if (!timer) {
      return res.status(404).json({ error: "No active timer found" });
    }

    res.json(timer);
  } catch (error) {
    console.error("Timer fetch error:", error);
    res.status(500).json({ error: "Internal server error" });
  }
});

// API endpoint to create a new timer
app.post("/api/timer", async (req, res) => {
  try {
    const { shopDomain, productId, startDate, endDate, description, settings } = req.body;

    const newTimer = new Timer({
      shopDomain,
      productId,
      startDate,
      endDate,
      description,
      settings
    });

    await newTimer.save();
    res.status(201).json(newTimer);
  } catch (error) {
    console.error("Timer creation error:", error);
    res.status(500).json({ error: "Failed to create timer" });
  }
});

// API endpoint to get all timers for a shop
app.get("/api/timers", async (req, res) => {
  try {
    const { shop } = req.query;

    if (!shop) {
      return res.status(400).json({ error: "Missing shop parameter" });
    }

    const timers = await Timer.find({ shopDomain: shop });
    res.json(timers);
  } catch (error) {
    console.error("Timers fetch error:", error);
    res.status(500).json({ error: "Internal server error" });
  }
});
"#;

/// Kit compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinKit;

impl BuiltinKit {
    pub fn new() -> Self {
        Self
    }

    pub fn scaffold_plan() -> ScaffoldPlan {
        ScaffoldPlan::new()
            .with_file("web/database.js", DATABASE)
            .with_file("web/models/Timer.js", TIMER_MODEL)
            .with_file("web/frontend/components/TimerForm.jsx", TIMER_FORM)
            .with_file("extensions/countdown-timer/assets/timer-widget.js", TIMER_WIDGET)
            .with_file("extensions/countdown-timer/blocks/timer.liquid", TIMER_BLOCK)
    }

    /// The MongoDB wiring for `web/index.js`.
    ///
    /// Also the fallback plan for directory kits without a `patch.toml`.
    pub fn patch_plan() -> Result<PatchPlan, DomainError> {
        PatchPlan::builder()
            .sentinel(SENTINEL)
            .import_marker(IMPORT_MARKER)
            .import_block(IMPORT_BLOCK)
            .body_block(API_ROUTES)
            .body_anchor(BODY_ANCHOR)
            .build()
    }

    pub fn notes() -> KitNotes {
        KitNotes {
            scaffold: vec![
                "Run 'splice patch' to wire 'connectDB' and the 'Timer' model into 'web/index.js'."
                    .into(),
                "Run 'npm run dev' to start your Shopify app.".into(),
            ],
            patch: vec![
                "Make sure MongoDB is running (mongod)".into(),
                "Run: npm run dev".into(),
                "Visit your Shopify app admin panel".into(),
            ],
        }
    }
}

impl KitSource for BuiltinKit {
    fn load(&self) -> SpliceResult<Kit> {
        let kit = Kit::new(BUILTIN_KIT_NAME, Self::scaffold_plan(), Self::patch_plan()?)
            .with_notes(Self::notes());
        debug!(kit = BUILTIN_KIT_NAME, files = kit.scaffold.len(), "Loaded built-in kit");
        Ok(kit)
    }
}
