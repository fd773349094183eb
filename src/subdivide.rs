pub trait Subdivide {
    fn split(&self, t: f64) -> Option<(Self, Self)>
    where
        Self: Sized;

    fn split_at_multiple_t(&self, mut t_values: Vec<f64>) -> Vec<Self>
    where
        Self: Sized + Clone,
    {
        // Sort the t-values to make it easier to split the curve
        t_values.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut segments: Vec<Self> = Vec::new();
        let mut last_t: f64 = 0.0;

        // Store the current segment; initially, it's the whole curve
        let mut current = self.clone();

        for &t in &t_values {
            // Normalize t to the remaining part of the curve
            let local_t = (t - last_t) / (1.0 - last_t);

            // Perform the split
            if let Some((left, right)) = current.split(local_t) {
                segments.push(left);

                // The right part is what remains to be split
                current = right;

                last_t = t;
            }
        }

        // Add the remaining part of the curve
        segments.push(current);

        segments
    }
}
